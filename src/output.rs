use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `SPENDLOG_QUIET=1` hides banners and notices; data output is unaffected.
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("SPENDLOG_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}
