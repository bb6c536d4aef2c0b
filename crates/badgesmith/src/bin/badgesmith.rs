fn main() {
    if let Err(err) = badgesmith::run() {
        eprintln!("{}", badgesmith::format_error(&err));
        std::process::exit(1);
    }
}
