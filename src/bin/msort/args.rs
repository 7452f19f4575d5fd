use clap::error::ErrorKind;
use clap::ArgAction;
use msort::{Error, Result};

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, required: false }
    };
}

#[macro_export]
macro_rules! arg_req {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, required: true }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub long_help: &'static str,
}

impl ProgSpec {
    pub const fn new(help: &'static str, long_help: &'static str) -> Self {
        Self { help, long_help }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
    pub required: bool,
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name).long(x.name).help(x.help).required(x.required);
    if let Some(ch) = x.short.chars().next() {
        b = b.short(ch);
    }
    if x.value.is_empty() {
        b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
    } else {
        b = b
            .value_name(x.value)
            .action(ArgAction::Append)
            .value_parser(clap::builder::NonEmptyStringValueParser::new());
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    let (Some(arg), Some(ind)) = (m.get_many::<String>(x.name), m.indices_of(x.name)) else {
        return;
    };
    if x.value.is_empty() {
        for i in ind {
            v.push(ArgValue::new(x.name, "", i));
        }
    } else {
        for (val, i) in arg.zip(ind) {
            v.push(ArgValue::new(x.name, val, i));
        }
    }
}

/// Parse the command line. Help and version are printed here, and come back as `Error::NoError`.
/// Anything clap doesn't like comes back as `Error::Usage`.
/// Values are returned in command line order.
pub fn parse(prog: &ProgSpec, spec: &[ArgSpec], argv: &[String]) -> Result<Vec<ArgValue>> {
    let mut a = clap::Command::new("msort")
        .version(env!("CARGO_PKG_VERSION"))
        .about(prog.help)
        .after_help(prog.long_help);

    for x in spec {
        a = add_arg(a, x);
    }
    let m = match a.try_get_matches_from(argv) {
        Ok(m) => m,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    e.print()?;
                    Err(Error::NoError)
                }
                _ => Err(Error::Usage(e.render().to_string())),
            };
        }
    };
    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok(v)
}
