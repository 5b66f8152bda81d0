//! The `Args` module helps giving command line options to the demonstration

use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "pstack", about = "Walk through a stack with remember points")]
pub struct Args {
    #[structopt(short, long)]
    version: bool,

    #[structopt(short, long)]
    debug: bool,

    /// Label of the remember point registered after the fourth push
    #[structopt(short, long, default_value = "point1")]
    label: String,

    /// Label used when popping back to a remember point. Defaults to `--label`
    #[structopt(short, long)]
    pop_label: Option<String>,
}

impl Args {
    fn print_version() {
        println!("{}", env!("CARGO_PKG_VERSION"));

        std::process::exit(0);
    }

    /// Parses the command line arguments, executes stopping options (such as --help
    /// or --version) and returns the given arguments
    pub fn handle() -> Args {
        let args = Args::from_args();

        if args.version {
            Args::print_version()
        }

        args
    }

    /// Is the demonstration launched in debug mode
    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pop_label(&self) -> &str {
        self.pop_label.as_deref().unwrap_or(&self.label)
    }
}
