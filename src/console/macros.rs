#[macro_export]
macro_rules! info {
    ($msg:expr) => {{
        let blue = $crate::colored::Colorize::blue($msg);
        println!("{}", blue);
    }};
    ($msg:expr, $($arg:expr),*) => {{
        let blue = $crate::colored::Colorize::blue(format!($msg, $($arg),*).as_str());
        println!("{blue}");
    }};
}

#[macro_export]
macro_rules! warn {
    ($msg:expr) => {{
        let yellow = $crate::colored::Colorize::yellow($msg);
        println!("{}", yellow);
    }};
    ($msg:expr, $($arg:expr),*) => {{
        let yellow = $crate::colored::Colorize::yellow(format!($msg, $($arg),*).as_str());
        println!("{yellow}");
    }};
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {{
        let green = $crate::colored::Colorize::bright_green($msg);
        println!("{}", green);
    }};
    ($msg:expr, $($arg:expr),*) => {{
        let green = $crate::colored::Colorize::bright_green(format!($msg, $($arg),*).as_str());
        println!("{green}");
    }};
}

/// Errors go to stderr so they survive when stdout is piped into a report.
#[macro_export]
macro_rules! error {
    ($msg:expr) => {{
        let red = $crate::colored::Colorize::red($msg);
        eprintln!("{}", red);
    }};
    ($msg:expr, $($arg:expr),*) => {{
        let red = $crate::colored::Colorize::red(format!($msg, $($arg),*).as_str());
        eprintln!("{red}");
    }};
}
