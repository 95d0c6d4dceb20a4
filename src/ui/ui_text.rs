use std::sync::LazyLock;

pub const ICON_ARROW_RIGHT: &str = "➡";
pub const ICON_ARROW_LEFT: &str = "⬅";
pub const ICON_SWAP: &str = "⟲";
pub const ICON_TREND_UP: &str = "📈";
pub const ICON_BOLT: &str = "⚡";
pub const ICON_GLOBE: &str = "🌍";

pub struct UiText {
    // --- Landing screen ---
    pub app_name: String,
    pub hero_title_top: String,
    pub hero_title_bottom: String,
    pub hero_body: String,
    pub cta_start: String,
    pub cta_launch: String,
    pub features_heading: String,
    /// (icon, title, body) per feature card
    pub feature_cards: &'static [(&'static str, &'static str, &'static str)],
    pub ready_heading: String,
    pub ready_body: String,
    pub footer: String,

    // --- Converter screen ---
    pub cv_title: String,
    pub cv_back: String,
    pub cv_heading: String,
    pub cv_sub: String,
    pub label_amount: String,
    pub label_from: String,
    pub label_to: String,
    pub amount_hint: String,
    pub btn_convert: String,
    pub btn_converting: String,
    pub result_caption: String,
    pub last_updated_prefix: String,

    // --- Errors ---
    pub invalid_amount: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_name: "CurrencyFlow".into(),
    hero_title_top: "Convert Currency".into(),
    hero_title_bottom: "Instantly".into(),
    hero_body: "Experience lightning-fast currency conversion with real-time rates. \
                Your gateway to global financial data at your fingertips."
        .into(),
    cta_start: format!("Start Converting {ICON_ARROW_RIGHT}"),
    cta_launch: format!("Launch Converter {ICON_ARROW_RIGHT}"),
    features_heading: "Why Choose CurrencyFlow?".into(),
    feature_cards: &[
        (
            ICON_BOLT,
            "Lightning Fast",
            "Get instant currency conversions with real-time exchange rates. \
             No waiting, no delays - just immediate results.",
        ),
        (
            ICON_GLOBE,
            "Global Coverage",
            "Support for major currencies worldwide. From dollars and euros \
             to shillings and naira, we've got you covered.",
        ),
        (
            ICON_TREND_UP,
            "Live Rates",
            "Always up-to-date with the latest market rates. \
             Make informed decisions with accurate data.",
        ),
    ],
    ready_heading: "Ready to Get Started?".into(),
    ready_body: "Join thousands of users who trust CurrencyFlow for their conversion needs.".into(),
    footer: "© 2024 CurrencyFlow. Rates shown are demo data only.".into(),

    cv_title: "Currency Converter".into(),
    cv_back: format!("{ICON_ARROW_LEFT} Back to Home"),
    cv_heading: "Convert Currency".into(),
    cv_sub: "Get real-time exchange rates".into(),
    label_amount: "Amount".into(),
    label_from: "From".into(),
    label_to: "To".into(),
    amount_hint: "Enter amount".into(),
    btn_convert: format!("{ICON_TREND_UP} Convert"),
    btn_converting: "Converting...".into(),
    result_caption: "Converted Amount".into(),
    last_updated_prefix: "Last updated:".into(),

    invalid_amount: "Please enter a valid amount".into(),
});
