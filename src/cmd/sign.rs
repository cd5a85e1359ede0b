use crate::cmd::{load_key, write_new, Cmd};
use crate::fmt::key::KeyDocument;
use crate::fmt::signature;
use cipher::rsa;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use crypto_hash::HashMethod;
use std::fs::File;
use std::path::PathBuf;

#[derive(Default)]
pub struct SignCmd;

impl Cmd for SignCmd {
    const NAME: &'static str = "sign";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("sign a file with a rsa private key")
            .arg(
                Arg::new("key")
                    .long("key-file")
                    .short('k')
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("private key file path"),
            )
            .arg(
                Arg::new("file")
                    .long("file")
                    .short('f')
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("the message file path"),
            )
            .arg(
                Arg::new("signature")
                    .long("signature-file")
                    .short('s')
                    .action(ArgAction::Set)
                    .default_value("signature.json")
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("to specify the output file path to save the signature"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        if crate::log_error(self.exec(m)).is_none() {
            std::process::exit(1);
        }
    }
}

impl SignCmd {
    fn exec(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let key = match load_key(m.get_one::<PathBuf>("key").unwrap())? {
            KeyDocument::Private(k) => k,
            KeyDocument::Public(_) => anyhow::bail!("signing requires a private key"),
        };

        let p = m.get_one::<PathBuf>("file").unwrap();
        let mut f = File::open(p)?;
        let sig = rsa::sign(&mut f, HashMethod::Md5, &key)?;

        let sp = m.get_one::<PathBuf>("signature").unwrap();
        write_new(sp, signature::to_json(&sig)?.as_bytes())?;

        log::info!(
            "signature of `{}` written to `{}`",
            p.display(),
            sp.display()
        );
        Ok(())
    }
}
