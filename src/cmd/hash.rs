use crate::cmd::Cmd;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use crypto_hash::md5::MD5;
use crypto_hash::Digest;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Default)]
pub struct HashCmd;

impl Cmd for HashCmd {
    const NAME: &'static str = "hash";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("compute the md5 digest of a string or file")
            .arg(
                Arg::new("str")
                    .value_name("STRING")
                    .action(ArgAction::Set)
                    .required(false)
                    .help("the message to digest"),
            )
            .arg(
                Arg::new("file")
                    .long("file")
                    .short('f')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("the message file path"),
            )
            .arg(
                Arg::new("prefix")
                    .long("prefix")
                    .action(ArgAction::SetTrue)
                    .required(false)
                    .help("display prefix with `0x`"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        if crate::log_error(self.exec(m)).is_none() {
            std::process::exit(1);
        }
    }
}

impl HashCmd {
    fn exec(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let mut md5 = MD5::new();

        if let Some(s) = m.get_one::<String>("str") {
            md5.write_all(s.as_bytes())?;
        } else if let Some(p) = m.get_one::<PathBuf>("file") {
            let mut f = File::open(p)?;
            let _len = std::io::copy(&mut f, &mut md5)?;
        } else {
            let _len = std::io::copy(&mut std::io::stdin().lock(), &mut md5)?;
        }

        let digest = md5.finalize();
        if m.get_flag("prefix") {
            println!("{:#x}", digest);
        } else {
            println!("{:x}", digest);
        }
        Ok(())
    }
}
