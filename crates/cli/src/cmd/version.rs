use crate::output::{print_json, OutputMode};

pub fn execute(mode: OutputMode) {
    match mode {
        OutputMode::Json => {
            let _ = print_json(&serde_json::json!({
                "name": "autoshield",
                "version": env!("CARGO_PKG_VERSION"),
            }));
        }
        OutputMode::Human => println!("autoshield {}", env!("CARGO_PKG_VERSION")),
    }
}
