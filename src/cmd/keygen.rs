use crate::cmd::{write_new, Cmd};
use crate::fmt::key;
use cipher::rsa::KeyPair;
use cipher::DefaultRand;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

#[derive(Default)]
pub struct KeygenCmd;

impl Cmd for KeygenCmd {
    const NAME: &'static str = "keygen";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("generate a rsa key pair")
            .arg(
                Arg::new("bits")
                    .long("bits")
                    .short('b')
                    .action(ArgAction::Set)
                    .default_value("2048")
                    .required(false)
                    .value_parser(value_parser!(usize))
                    .help("to specify the public key modulus bits length"),
            )
            .arg(
                Arg::new("test")
                    .long("test")
                    .short('t')
                    .action(ArgAction::Set)
                    .default_value("40")
                    .required(false)
                    .value_parser(value_parser!(usize))
                    .help("to specify the prime test rounds"),
            )
            .arg(
                Arg::new("private")
                    .long("private-key-file")
                    .short('d')
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("to specify the output file path to save the private key"),
            )
            .arg(
                Arg::new("public")
                    .long("public-key-file")
                    .short('e')
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("to specify the output file path to save the public key"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        if crate::log_error(self.exec(m)).is_none() {
            std::process::exit(1);
        }
    }
}

impl KeygenCmd {
    fn exec(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let (bits, rounds) = (
            m.get_one::<usize>("bits").copied().unwrap(),
            m.get_one::<usize>("test").copied().unwrap(),
        );

        let mut rng = DefaultRand::default();
        let pair = KeyPair::generate(bits, rounds, &mut rng)?;

        let p = m.get_one::<PathBuf>("private").unwrap();
        write_new(p, key::private_to_json(pair.private())?.as_bytes())?;
        let p = m.get_one::<PathBuf>("public").unwrap();
        write_new(p, key::public_to_json(pair.public())?.as_bytes())?;

        log::info!("generated a {bits}-bit rsa key pair");
        Ok(())
    }
}
