use clap::{value_parser, Arg, ArgAction, Command};

pub fn ask() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Makes jobdesk verbose. Useful for debugging and seeing every query and request")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("serve")
                .about("Start the jobdesk web server")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to .jobdeskrc file, it must exist when given [default: .jobdeskrc]"),
                )
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .help("Custom server port [default: 5000]")
                        .value_parser(value_parser!(u16)),
                )
                .arg(
                    Arg::new("database")
                        .short('d')
                        .long("database")
                        .help("Path to the SQLite database file [default: ./data.db]"),
                )
                .arg(
                    Arg::new("on-job-delete")
                        .long("on-job-delete")
                        .help("What happens to the employees of a deleted job [default: orphan]")
                        .value_parser(["orphan", "cascade", "reject"]),
                )
                .arg(
                    Arg::new("validate-employee-job")
                        .long("validate-employee-job")
                        .help("Reject employees whose job_id names no existing job")
                        .action(ArgAction::SetTrue)
                        .overrides_with("no-validate-employee-job"),
                )
                .arg(
                    Arg::new("no-validate-employee-job")
                        .long("no-validate-employee-job")
                        .help("Store any job_id as submitted, even when the config file enables validation")
                        .action(ArgAction::SetTrue)
                        .overrides_with("validate-employee-job"),
                ),
        )
}
