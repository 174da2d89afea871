//! Categorization, naming and tagging rules.
//!
//! [`CatalogConfig`] is the serializable form that lives in `settings.toml`.
//! [`CatalogRules`] is the normalized, immutable form the indexer uses.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::Category;

/// Keyword list for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub category: Category,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Rule tables as stored in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Icons sorted ahead of everything else
    #[serde(default = "default_popular")]
    pub popular: Vec<String>,

    /// Ordered keyword tables; the first matching category wins
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryKeywords>,

    /// Display names that title-casing gets wrong
    #[serde(default = "default_display_names")]
    pub display_names: BTreeMap<String, String>,

    /// Extra search synonyms per icon
    #[serde(default = "default_tags")]
    pub tags: BTreeMap<String, Vec<String>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            popular: default_popular(),
            categories: default_categories(),
            display_names: default_display_names(),
            tags: default_tags(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_popular() -> Vec<String> {
    strings(&[
        "openai",
        "anthropic",
        "claude",
        "chatgpt",
        "gemini",
        "github",
        "google",
        "microsoft",
        "aws",
        "figma",
        "slack",
        "notion",
        "vercel",
        "docker",
        "react",
        "linkedin",
    ])
}

fn default_categories() -> Vec<CategoryKeywords> {
    let table: [(Category, &[&str]); 12] = [
        (
            Category::Ai,
            &[
                "openai",
                "anthropic",
                "claude",
                "chatgpt",
                "gpt",
                "gemini",
                "bard",
                "mistral",
                "cohere",
                "perplexity",
                "huggingface",
                "ollama",
                "llama",
                "deepseek",
                "groq",
                "grok",
                "xai",
                "midjourney",
                "stability",
                "replicate",
                "copilot",
                "qwen",
                "ai",
            ],
        ),
        (
            Category::Cloud,
            &[
                "aws",
                "azure",
                "gcp",
                "googlecloud",
                "google-cloud",
                "cloudflare",
                "vercel",
                "netlify",
                "heroku",
                "digitalocean",
                "linode",
                "vultr",
                "flyio",
                "railway",
                "alibabacloud",
                "oracle",
                "ibm",
                "openstack",
            ],
        ),
        (
            Category::Dev,
            &[
                "github",
                "gitlab",
                "bitbucket",
                "git",
                "docker",
                "kubernetes",
                "npm",
                "yarn",
                "vscode",
                "visualstudio",
                "jetbrains",
                "intellij",
                "neovim",
                "vim",
                "terminal",
                "linux",
                "ubuntu",
                "postman",
                "sentry",
                "jenkins",
                "circleci",
                "stackoverflow",
                "codepen",
            ],
        ),
        (
            Category::Framework,
            &[
                "react",
                "vue",
                "angular",
                "svelte",
                "nextjs",
                "nuxt",
                "remix",
                "astro",
                "django",
                "flask",
                "rails",
                "laravel",
                "spring",
                "express",
                "nodejs",
                "deno",
                "tailwind",
                "bootstrap",
                "flutter",
                "electron",
                "tauri",
            ],
        ),
        (
            Category::Design,
            &[
                "figma",
                "sketch",
                "adobe",
                "photoshop",
                "illustrator",
                "canva",
                "dribbble",
                "behance",
                "framer",
                "invision",
                "affinity",
                "blender",
            ],
        ),
        (
            Category::Social,
            &[
                "linkedin",
                "twitter",
                "facebook",
                "instagram",
                "youtube",
                "tiktok",
                "reddit",
                "discord",
                "telegram",
                "whatsapp",
                "mastodon",
                "threads",
                "bluesky",
                "pinterest",
                "snapchat",
                "twitch",
            ],
        ),
        (
            Category::Database,
            &[
                "postgresql",
                "postgres",
                "mysql",
                "mongodb",
                "redis",
                "sqlite",
                "supabase",
                "firebase",
                "dynamodb",
                "cassandra",
                "elasticsearch",
                "neo4j",
                "mariadb",
                "prisma",
                "planetscale",
            ],
        ),
        (
            Category::Browser,
            &[
                "chrome",
                "firefox",
                "safari",
                "msedge",
                "opera",
                "brave",
                "vivaldi",
                "chromium",
            ],
        ),
        (
            Category::Crypto,
            &[
                "bitcoin",
                "ethereum",
                "solana",
                "binance",
                "coinbase",
                "metamask",
                "polygon",
                "cardano",
                "ripple",
                "dogecoin",
                "chainlink",
                "uniswap",
            ],
        ),
        (
            Category::Ecommerce,
            &[
                "shopify",
                "stripe",
                "paypal",
                "amazon",
                "woocommerce",
                "etsy",
                "ebay",
                "square",
                "klarna",
                "magento",
                "bigcommerce",
            ],
        ),
        (
            Category::Productivity,
            &[
                "notion",
                "slack",
                "trello",
                "asana",
                "jira",
                "confluence",
                "todoist",
                "evernote",
                "obsidian",
                "clickup",
                "linear",
                "zoom",
                "outlook",
                "calendar",
                "dropbox",
                "googledrive",
            ],
        ),
        (
            Category::Security,
            &[
                "1password",
                "bitwarden",
                "lastpass",
                "keepass",
                "okta",
                "auth0",
                "nordvpn",
                "protonvpn",
                "norton",
                "kaspersky",
                "yubikey",
                "letsencrypt",
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(category, keywords)| CategoryKeywords {
            category,
            keywords: strings(keywords),
        })
        .collect()
}

fn default_display_names() -> BTreeMap<String, String> {
    [
        ("openai", "OpenAI"),
        ("chatgpt", "ChatGPT"),
        ("github", "GitHub"),
        ("gitlab", "GitLab"),
        ("vscode", "VS Code"),
        ("aws", "AWS"),
        ("gcp", "Google Cloud"),
        ("ibm", "IBM"),
        ("npm", "npm"),
        ("huggingface", "Hugging Face"),
        ("deepseek", "DeepSeek"),
        ("xai", "xAI"),
        ("digitalocean", "DigitalOcean"),
        ("mongodb", "MongoDB"),
        ("postgresql", "PostgreSQL"),
        ("mysql", "MySQL"),
        ("sqlite", "SQLite"),
        ("graphql", "GraphQL"),
        ("nextjs", "Next.js"),
        ("nodejs", "Node.js"),
        ("linkedin", "LinkedIn"),
        ("youtube", "YouTube"),
        ("tiktok", "TikTok"),
        ("whatsapp", "WhatsApp"),
        ("paypal", "PayPal"),
        ("woocommerce", "WooCommerce"),
        ("clickup", "ClickUp"),
        ("1password", "1Password"),
        ("macos", "macOS"),
        ("ios", "iOS"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_tags() -> BTreeMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 14] = [
        ("github", &["git", "version control", "code"]),
        ("gitlab", &["git", "version control", "devops"]),
        ("openai", &["gpt", "chatgpt", "llm"]),
        ("anthropic", &["claude", "llm"]),
        ("aws", &["amazon", "cloud computing"]),
        ("figma", &["ui", "prototyping"]),
        ("slack", &["chat", "messaging"]),
        ("docker", &["containers"]),
        ("kubernetes", &["k8s", "containers"]),
        ("postgresql", &["postgres", "sql"]),
        ("linkedin", &["professional", "networking"]),
        ("vscode", &["editor", "ide"]),
        ("react", &["ui", "javascript"]),
        ("stripe", &["payments"]),
    ];

    table
        .into_iter()
        .map(|(name, tags)| (name.to_string(), strings(tags)))
        .collect()
}

/// Normalized rule set injected into the indexer.
///
/// All keys and keywords are lowercased once at construction so every lookup
/// is case-insensitive.
#[derive(Debug, Clone)]
pub struct CatalogRules {
    categories: Vec<(Category, Vec<String>)>,
    display_names: HashMap<String, String>,
    tags: HashMap<String, Vec<String>>,
    popular: HashSet<String>,
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

impl CatalogRules {
    pub fn from_config(config: &CatalogConfig) -> Self {
        let categories = config
            .categories
            .iter()
            .map(|table| {
                let keywords = table
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    // An empty keyword would match every name
                    .filter(|k| !k.is_empty())
                    .collect();
                (table.category, keywords)
            })
            .collect();

        Self {
            categories,
            display_names: config
                .display_names
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.clone()))
                .collect(),
            tags: config
                .tags
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.clone()))
                .collect(),
            popular: config.popular.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// First category whose keyword list matches, in table order.
    ///
    /// A keyword matches when it is a substring of the lowercased base name or
    /// the base name is a substring of it. The symmetric test means short
    /// keywords like `ai` also claim unrelated names (`tailwind`, `mailchimp`).
    pub fn categorize(&self, base_name: &str) -> Category {
        let name = base_name.to_lowercase();

        self.categories
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|k| name.contains(k.as_str()) || k.contains(name.as_str()))
            })
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    /// Human-readable label: special-case table, else title-cased words.
    pub fn display_name(&self, base_name: &str) -> String {
        if let Some(name) = self.display_names.get(&base_name.to_lowercase()) {
            return name.clone();
        }

        split_words(base_name)
            .iter()
            .map(|word| title_case(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Base name, category and any configured synonyms, without duplicates.
    pub fn generate_tags(&self, base_name: &str, category: Category) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        let synonyms = self
            .tags
            .get(&base_name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let candidates = [base_name, category.as_str()]
            .into_iter()
            .chain(synonyms.iter().map(String::as_str));

        for tag in candidates {
            if seen.insert(tag.to_lowercase()) {
                tags.push(tag.to_string());
            }
        }

        tags
    }

    pub fn is_popular(&self, base_name: &str) -> bool {
        self.popular.contains(&base_name.to_lowercase())
    }
}

/// Split on `-`, `_`, whitespace and lower-to-upper camelCase boundaries.
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push(ch);
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_known_names() {
        let rules = CatalogRules::default();
        assert_eq!(rules.categorize("openai"), Category::Ai);
        assert_eq!(rules.categorize("github"), Category::Dev);
        assert_eq!(rules.categorize("figma"), Category::Design);
        assert_eq!(rules.categorize("aws"), Category::Cloud);
        assert_eq!(rules.categorize("slack"), Category::Productivity);
        assert_eq!(rules.categorize("unknownxyz123"), Category::Other);
    }

    #[test]
    fn test_categorize_is_case_insensitive_and_deterministic() {
        let rules = CatalogRules::default();
        assert_eq!(rules.categorize("OpenAI"), Category::Ai);
        for name in ["openai", "awsicon", "stripe", "zzz", "redis-stack"] {
            assert_eq!(rules.categorize(name), rules.categorize(name));
        }
    }

    #[test]
    fn test_categorize_symmetric_substring() {
        let rules = CatalogRules::default();
        // keyword inside the name
        assert_eq!(rules.categorize("awsicon"), Category::Cloud);
        // name inside a keyword
        assert_eq!(rules.categorize("postgre"), Category::Database);
    }

    #[test]
    fn test_categorize_empty_name_hits_first_table() {
        let rules = CatalogRules::default();
        // "" is a substring of every keyword
        assert_eq!(rules.categorize(""), Category::Ai);
    }

    #[test]
    fn test_categorize_first_category_wins() {
        let rules = CatalogRules::default();
        // "ai" is an ai keyword and wins over the framework table
        assert_eq!(rules.categorize("tailwind"), Category::Ai);
        // "googlecloud" contains "google", and cloud comes before everything else
        assert_eq!(rules.categorize("google"), Category::Cloud);
    }

    #[test]
    fn test_injected_keyword_tables() {
        let config = CatalogConfig {
            categories: vec![
                CategoryKeywords {
                    category: Category::Social,
                    keywords: vec!["Git".to_string(), "".to_string()],
                },
                CategoryKeywords {
                    category: Category::Dev,
                    keywords: vec!["github".to_string()],
                },
            ],
            ..CatalogConfig::default()
        };
        let rules = CatalogRules::from_config(&config);

        assert_eq!(rules.categorize("github"), Category::Social);
        assert_eq!(rules.categorize("openai"), Category::Other);
    }

    #[test]
    fn test_display_name_special_cases() {
        let rules = CatalogRules::default();
        assert_eq!(rules.display_name("openai"), "OpenAI");
        assert_eq!(rules.display_name("VSCode"), "VS Code");
        assert_eq!(rules.display_name("github"), "GitHub");
    }

    #[test]
    fn test_display_name_title_case() {
        let rules = CatalogRules::default();
        assert_eq!(rules.display_name("figma"), "Figma");
        assert_eq!(rules.display_name("google-cloud"), "Google Cloud");
        assert_eq!(rules.display_name("hugging_face"), "Hugging Face");
        assert_eq!(rules.display_name("myIconName"), "My Icon Name");
        assert_eq!(rules.display_name("-leading--dash-"), "Leading Dash");
        assert_eq!(rules.display_name("AWSLambda"), "AWSLambda");
    }

    #[test]
    fn test_generate_tags() {
        let rules = CatalogRules::default();
        assert_eq!(
            rules.generate_tags("github", Category::Dev),
            vec!["github", "dev", "git", "version control", "code"]
        );
        assert_eq!(
            rules.generate_tags("figjam", Category::Design),
            vec!["figjam", "design"]
        );
    }

    #[test]
    fn test_generate_tags_dedup() {
        let rules = CatalogRules::default();
        // "ai" as a name collides with its own category
        assert_eq!(rules.generate_tags("AI", Category::Ai), vec!["AI"]);
    }

    #[test]
    fn test_popular_case_insensitive() {
        let rules = CatalogRules::default();
        assert!(rules.is_popular("GitHub"));
        assert!(!rules.is_popular("gitlab"));
    }
}
