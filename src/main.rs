use bitseal::cmd::{Cmd, DecryptCmd, EncryptCmd, HashCmd, KeygenCmd, SignCmd, VerifyCmd};
use clap::{crate_version, Command};
use log::LevelFilter;

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let app = Command::new("bitseal")
        .version(crate_version!())
        .about("rsa file signing toolkit")
        .subcommand(KeygenCmd::cmd())
        .subcommand(EncryptCmd::cmd())
        .subcommand(DecryptCmd::cmd())
        .subcommand(SignCmd::cmd())
        .subcommand(VerifyCmd::cmd())
        .subcommand(HashCmd::cmd())
        .get_matches();

    if let Some((s, m)) = app.subcommand() {
        match s {
            KeygenCmd::NAME => KeygenCmd.run(m),
            EncryptCmd::NAME => EncryptCmd.run(m),
            DecryptCmd::NAME => DecryptCmd.run(m),
            SignCmd::NAME => SignCmd.run(m),
            VerifyCmd::NAME => VerifyCmd.run(m),
            HashCmd::NAME => HashCmd.run(m),
            name => {
                panic!("unsupport for {}", name)
            }
        }
    } else {
        println!("{} {}", env!("CARGO_PKG_NAME"), crate_version!());
    }
}
