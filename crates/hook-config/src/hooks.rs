//! Deserialization of the `[hooks]` table.
//!
//! The environment provider parses values, so `HOOKCTL_HOOKS__PRE_COMMIT=true`
//! arrives as a bool and `=1` as a number. Both are valid shell bodies and are
//! turned back into their text form.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum HookBody {
    Text(String),
    Flag(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<HookBody> for String {
    fn from(body: HookBody) -> Self {
        match body {
            HookBody::Text(text) => text,
            HookBody::Flag(flag) => flag.to_string(),
            HookBody::Unsigned(n) => n.to_string(),
            HookBody::Signed(n) => n.to_string(),
            HookBody::Float(n) => n.to_string(),
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, HookBody>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, body)| (name, String::from(body)))
        .collect())
}

#[cfg(test)]
mod tests {
    use figment::{Figment, providers::Serialized};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Table {
        #[serde(deserialize_with = "super::deserialize")]
        hooks: std::collections::BTreeMap<String, String>,
    }

    #[test]
    fn scalar_bodies_become_text() {
        let figment = Figment::new()
            .merge(Serialized::default("hooks.pre-commit", true))
            .merge(Serialized::default("hooks.pre-push", 7_u8))
            .merge(Serialized::default("hooks.update", -1_i32))
            .merge(Serialized::default("hooks.commit-msg", "exit 0"));
        let table: Table = figment.extract().expect("scalars should extract");
        assert_eq!(table.hooks["pre-commit"], "true");
        assert_eq!(table.hooks["pre-push"], "7");
        assert_eq!(table.hooks["update"], "-1");
        assert_eq!(table.hooks["commit-msg"], "exit 0");
    }
}
