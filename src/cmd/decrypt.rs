use crate::cmd::{load_key, read_input, write_output, Cmd};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

#[derive(Default)]
pub struct DecryptCmd;

impl Cmd for DecryptCmd {
    const NAME: &'static str = "decrypt";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("decrypt a single block of data with a rsa key")
            .arg(
                Arg::new("key")
                    .long("key-file")
                    .short('k')
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("key file path"),
            )
            .arg(
                Arg::new("input")
                    .long("input")
                    .short('f')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("the input file path, stdin if not given"),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("the output file path, stdout if not given"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        if crate::log_error(self.exec(m)).is_none() {
            std::process::exit(1);
        }
    }
}

impl DecryptCmd {
    fn exec(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let key = load_key(m.get_one::<PathBuf>("key").unwrap())?;
        let cipher = read_input(m.get_one::<PathBuf>("input").map(|p| p.as_path()))?;

        let msg = key.as_key().decrypt(cipher.as_slice())?;
        write_output(m.get_one::<PathBuf>("output").map(|p| p.as_path()), &msg)
    }
}
