use crate::fmt::key::KeyDocument;
use clap::{ArgMatches, Command};
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::Path;

pub trait Cmd {
    const NAME: &'static str;

    fn cmd() -> Command;

    fn run(&self, m: &ArgMatches);
}

mod keygen;
pub use keygen::KeygenCmd;

mod encrypt;
pub use encrypt::EncryptCmd;

mod decrypt;
pub use decrypt::DecryptCmd;

mod sign;
pub use sign::SignCmd;

mod verify;
pub use verify::VerifyCmd;

mod hash;
pub use hash::HashCmd;

fn load_key(path: &Path) -> anyhow::Result<KeyDocument> {
    let s = std::fs::read_to_string(path)?;
    Ok(KeyDocument::from_json(s.as_str())?)
}

// 已存在的文件不覆盖
fn write_new(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let mut f = OpenOptions::new().create_new(true).write(true).open(path)?;
    f.write_all(data)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    let mut data = Vec::with_capacity(1024);
    match path {
        Some(p) => {
            let mut f = std::fs::File::open(p)?;
            let _len = f.read_to_end(&mut data)?;
        }
        None => {
            let _len = std::io::stdin().lock().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

fn write_output(path: Option<&Path>, data: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(p) => write_new(p, data),
        None => {
            std::io::stdout().lock().write_all(data)?;
            Ok(())
        }
    }
}
