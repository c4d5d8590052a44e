use clap::Parser;

/// Jenkins executor-status Prometheus exporter.
#[derive(Parser, Debug)]
#[command(name = "jex-exporterd", version, about)]
pub struct Args {
    /// Remote Jenkins base URLs, comma separated
    #[arg(long)]
    pub urls: String,

    /// Seconds between poll cycles
    #[arg(long, default_value_t = 60)]
    pub poll_delay: u64,

    /// Run one poll cycle, print the metrics snapshot to stdout and exit
    #[arg(long, default_value_t = false)]
    pub one_shot: bool,

    /// Listen address for the scrape endpoint
    #[arg(long, default_value = "0.0.0.0:9001")]
    pub listen: String,

    /// Log verbosity (tracing env-filter syntax)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log output format (text|json)
    #[arg(long, default_value = "text")]
    pub log_format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_flag_is_required() {
        let result = Args::try_parse_from(["jex-exporterd"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_match_the_documented_contract() {
        let args = Args::try_parse_from(["jex-exporterd", "--urls", "http://a"]).unwrap();

        assert_eq!(args.urls, "http://a");
        assert_eq!(args.poll_delay, 60);
        assert!(!args.one_shot);
        assert_eq!(args.listen, "0.0.0.0:9001");
        assert_eq!(args.log_level, "info");
        assert_eq!(args.log_format, "text");
    }

    #[test]
    fn all_flags_parse() {
        let args = Args::try_parse_from([
            "jex-exporterd",
            "--urls",
            "http://a,http://b",
            "--poll-delay",
            "5",
            "--one-shot",
            "--listen",
            "127.0.0.1:9100",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.poll_delay, 5);
        assert!(args.one_shot);
        assert_eq!(args.listen, "127.0.0.1:9100");
        assert_eq!(args.log_format, "json");
    }
}
