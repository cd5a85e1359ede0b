use crate::cmd::{load_key, Cmd};
use crate::fmt::signature;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::path::PathBuf;

#[derive(Default)]
pub struct VerifyCmd;

impl Cmd for VerifyCmd {
    const NAME: &'static str = "verify";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("verify a file against a signature with a rsa public key")
            .arg(
                Arg::new("key")
                    .long("key-file")
                    .short('k')
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("public key file path"),
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
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("the signature file path"),
            )
    }

    // 退出状态就是校验结果: 通过为0, 拒绝为1, 其它错误为2
    fn run(&self, m: &ArgMatches) {
        match crate::log_error(self.exec(m)) {
            Some(true) => {
                println!("Validation success.");
            }
            Some(false) => {
                println!("Validation failed.");
                std::process::exit(1);
            }
            None => std::process::exit(2),
        }
    }
}

impl VerifyCmd {
    fn exec(&self, m: &ArgMatches) -> anyhow::Result<bool> {
        let key = load_key(m.get_one::<PathBuf>("key").unwrap())?;

        let s = std::fs::read_to_string(m.get_one::<PathBuf>("signature").unwrap())?;
        let sig = signature::from_json(s.as_str())?;

        let mut f = File::open(m.get_one::<PathBuf>("file").unwrap())?;
        Ok(sig.verify(&mut f, key.as_key())?)
    }
}
