use std::process::ExitCode;

/// Parses the process argument vector and prints the result as JSON.
///
/// The binary's own arguments are the input: `argmap --x 1 -yz -- tail`
/// prints the parsed map. Errors go to stderr with a nonzero exit status.
fn main() -> ExitCode {
    match argmap_core::parse_env() {
        Ok(parsed) => match serde_json::to_string_pretty(&parsed) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("argmap: failed to serialize result: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("argmap: {err}");
            ExitCode::FAILURE
        }
    }
}
