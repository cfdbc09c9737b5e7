//! Help command implementation

/// Usage lines for `program`, as printed by `help`
pub fn usage_lines(program: &str) -> [String; 3] {
    [
        "Usage syntax:".to_string(),
        format!("{program} install - Install the Docker image for Jupyter"),
        format!("{program} [run]   - Run the Docker image for Jupyter"),
    ]
}

/// Print usage syntax
pub fn cmd_help(program: &str) {
    for line in usage_lines(program) {
        println!("{line}");
    }
    println!();
}
