//! Timestamp conversion command

use anyhow::Result;

use otto::output::{print_event, Icons};
use otto::timeconv::parse_moment;

pub fn cmd_time(input: &str, json: bool) -> Result<()> {
    let moment = parse_moment(input)?;

    if json {
        print_event(&serde_json::json!({
            "event": "time",
            "input": input,
            "epoch_seconds": moment.epoch_seconds,
            "epoch_millis": moment.epoch_millis,
            "utc": moment.utc,
            "local": moment.local,
        }));
        return Ok(());
    }

    let icons = Icons::for_stdout();
    println!("{} {}", icons.clock, input);
    println!();
    println!("  Epoch seconds: {}", moment.epoch_seconds);
    println!("  Epoch millis:  {}", moment.epoch_millis);
    println!("  UTC:           {}", moment.utc);
    println!("  Local:         {}", moment.local);

    Ok(())
}
