//! Built-in company dataset.

use crate::model::{Company, ProviderId};

use ProviderId::{Alibaba, Aws, Azure, Gcp, Oracle, Other};

/// (name, symbol, domain, provider)
const COMPANIES: &[(&str, &str, &str, ProviderId)] = &[
    // AWS
    ("AWS", "AMZN", "aws.amazon.com", Aws),
    ("Amazon", "AMZN", "amazon.com", Aws),
    ("Netflix", "NFLX", "netflix.com", Aws),
    ("Reddit", "RDDT", "reddit.com", Aws),
    ("Slack", "CRM", "slack.com", Aws),
    ("Airbnb", "ABNB", "airbnb.com", Aws),
    ("Lyft", "LYFT", "lyft.com", Aws),
    ("Pinterest", "PINS", "pinterest.com", Aws),
    ("Zoom", "ZM", "zoom.us", Aws),
    ("Twitch", "AMZN", "twitch.tv", Aws),
    ("Coinbase", "COIN", "coinbase.com", Aws),
    ("Robinhood", "HOOD", "robinhood.com", Aws),
    ("Expedia", "EXPE", "expedia.com", Aws),
    ("Moderna", "MRNA", "modernatx.com", Aws),
    ("Capital One", "COF", "capitalone.com", Aws),
    ("Duolingo", "DUOL", "duolingo.com", Aws),
    ("Peloton", "PTON", "onepeloton.com", Aws),
    ("DoorDash", "DASH", "doordash.com", Aws),
    ("Roku", "ROKU", "roku.com", Aws),
    ("Snowflake", "SNOW", "snowflake.com", Aws),
    ("Atlassian", "TEAM", "atlassian.com", Aws),
    ("Intuit", "INTU", "intuit.com", Aws),
    ("Zillow", "Z", "zillow.com", Aws),
    ("Hulu", "DIS", "hulu.com", Aws),
    ("Disney", "DIS", "disney.com", Aws),
    ("McDonald's", "MCD", "mcdonalds.com", Aws),
    ("Epic Games", "EPIC", "epicgames.com", Aws),
    ("Ring", "AMZN", "ring.com", Aws),
    ("Canva", "CANVA", "canva.com", Aws),
    ("Venmo", "PYPL", "venmo.com", Aws),
    // Azure
    ("Microsoft", "MSFT", "microsoft.com", Azure),
    ("LinkedIn", "MSFT", "linkedin.com", Azure),
    ("GitHub", "MSFT", "github.com", Azure),
    ("OpenAI", "OPENAI", "openai.com", Azure),
    ("Walmart", "WMT", "walmart.com", Azure),
    ("eBay", "EBAY", "ebay.com", Azure),
    ("Adobe", "ADBE", "adobe.com", Azure),
    ("BMW", "BMW", "bmw.com", Azure),
    ("Starbucks", "SBUX", "starbucks.com", Azure),
    ("Xbox", "MSFT", "xbox.com", Azure),
    ("Chevron", "CVX", "chevron.com", Azure),
    ("AT&T", "T", "att.com", Azure),
    ("Kroger", "KR", "kroger.com", Azure),
    ("Mastercard", "MA", "mastercard.com", Azure),
    ("Walgreens", "WBA", "walgreens.com", Azure),
    // GCP
    ("Google", "GOOGL", "google.com", Gcp),
    ("YouTube", "GOOGL", "youtube.com", Gcp),
    ("Spotify", "SPOT", "spotify.com", Gcp),
    ("Snap", "SNAP", "snap.com", Gcp),
    ("PayPal", "PYPL", "paypal.com", Gcp),
    ("Target", "TGT", "target.com", Gcp),
    ("Etsy", "ETSY", "etsy.com", Gcp),
    ("Twitter", "X", "twitter.com", Gcp),
    ("Shopify", "SHOP", "shopify.com", Gcp),
    ("Home Depot", "HD", "homedepot.com", Gcp),
    ("Wayfair", "W", "wayfair.com", Gcp),
    ("Vimeo", "VMEO", "vimeo.com", Gcp),
    ("Anthropic", "ANTH", "anthropic.com", Gcp),
    // Oracle
    ("Oracle", "ORCL", "oracle.com", Oracle),
    ("TikTok", "BDNCE", "tiktok.com", Oracle),
    ("Uber", "UBER", "uber.com", Oracle),
    ("FedEx", "FDX", "fedex.com", Oracle),
    ("Cerner", "ORCL", "cerner.com", Oracle),
    // Alibaba
    ("Alibaba", "BABA", "alibaba.com", Alibaba),
    ("AliExpress", "BABA", "aliexpress.com", Alibaba),
    ("Taobao", "BABA", "taobao.com", Alibaba),
    ("Lazada", "BABA", "lazada.com", Alibaba),
    ("Tmall", "BABA", "tmall.com", Alibaba),
    // Other / self-hosted
    ("Meta", "META", "meta.com", Other),
    ("Facebook", "META", "facebook.com", Other),
    ("Instagram", "META", "instagram.com", Other),
    ("WhatsApp", "META", "whatsapp.com", Other),
    ("Apple", "AAPL", "apple.com", Other),
    ("Dropbox", "DBX", "dropbox.com", Other),
    ("Cloudflare", "NET", "cloudflare.com", Other),
    ("Wikipedia", "WIKI", "wikipedia.org", Other),
];

/// The immutable built-in company list, in dataset order.
#[must_use]
pub fn builtin_companies() -> Vec<Company> {
    COMPANIES
        .iter()
        .map(|(name, symbol, domain, provider)| Company::new(*name, *symbol, *domain, *provider))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_domains_are_unique() {
        let companies = builtin_companies();
        let domains: HashSet<&str> = companies.iter().map(|c| c.domain.as_str()).collect();
        assert_eq!(domains.len(), companies.len());
    }

    #[test]
    fn test_builtin_domains_are_normalized() {
        for company in builtin_companies() {
            assert!(!company.domain.starts_with("www."), "{}", company.domain);
            assert!(!company.domain.contains("://"), "{}", company.domain);
        }
    }

    #[test]
    fn test_builtin_list_contains_reference_entries() {
        let companies = builtin_companies();
        assert!(companies
            .iter()
            .any(|c| c.name == "AWS" && c.domain == "aws.amazon.com"));
        assert!(companies.iter().any(|c| c.name == "Netflix"));
        assert!(companies.iter().all(|c| !c.is_custom()));
    }
}
