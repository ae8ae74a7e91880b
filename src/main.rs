use durlit::{Duration, Unit};

fn describe(d: Duration) -> String {
    Unit::ALL
        .into_iter()
        .map(|unit| format!("{}{unit}", d.as_unit(unit)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> durlit::Result<()> {
    env_logger::builder()
        .filter_module("durlit", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();

    if args.is_empty() {
        log::warn!("usage: durlit <literal>...");
        return Ok(());
    }

    let mut first_error = None;

    for arg in &args {
        match durlit::parse(arg) {
            Ok(d) => {
                println!("{arg}\t{d}\t{}", d.as_millis());
                log::debug!("{arg}: {}", describe(d));
            }
            Err(e) => {
                log::error!("{e}");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
