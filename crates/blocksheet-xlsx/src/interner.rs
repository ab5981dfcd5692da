//! Rule interner for style deduplication

use ahash::AHashMap;

/// Placeholder replaced with a rule's own id by [`RuleInterner::rules`]
pub const RULE_ID_TOKEN: &str = "{#id}";

/// Interns rendered XML rule strings and hands out sequential ids
///
/// Identical rule text always maps to the same id. Ids start at a
/// configurable value so custom entries land after the builtin ones of
/// each styles.xml section (e.g. 164 for number formats).
#[derive(Debug)]
pub struct RuleInterner {
    /// Rules in id order (`rules[i]` has id `start + i`)
    rules: Vec<String>,
    /// Fast lookup for deduplication
    index_map: AHashMap<String, u32>,
    start: u32,
    /// Whether [`RULE_ID_TOKEN`] is substituted on output
    id_token: bool,
}

impl RuleInterner {
    /// Create an interner whose first id is 1
    pub fn new() -> Self {
        Self::with_start(1)
    }

    /// Create an interner whose first id is `start`
    pub fn with_start(start: u32) -> Self {
        Self {
            rules: Vec::new(),
            index_map: AHashMap::new(),
            start,
            id_token: false,
        }
    }

    /// Create an interner whose rules carry [`RULE_ID_TOKEN`] for their own id
    pub fn with_id_token(start: u32) -> Self {
        Self {
            id_token: true,
            ..Self::with_start(start)
        }
    }

    /// Intern a rule, returning its id
    pub fn push(&mut self, rule: &str) -> u32 {
        if let Some(&id) = self.index_map.get(rule) {
            return id;
        }

        let id = self.start + self.rules.len() as u32;
        self.rules.push(rule.to_string());
        self.index_map.insert(rule.to_string(), id);
        id
    }

    /// Id of an already interned rule
    pub fn get(&self, rule: &str) -> Option<u32> {
        self.index_map.get(rule).copied()
    }

    /// All rules in ascending id order
    ///
    /// With an id token only its first occurrence in each rule is replaced, so
    /// the token may also appear in user text later in the rule. Without one
    /// rules are returned verbatim.
    pub fn rules(&self) -> Vec<String> {
        if !self.id_token {
            return self.rules.clone();
        }
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| rule.replacen(RULE_ID_TOKEN, &(self.start + i as u32).to_string(), 1))
            .collect()
    }

    /// First id handed out
    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_deduplicates() {
        let mut interner = RuleInterner::new();
        assert_eq!(interner.push("<b/>"), 1);
        assert_eq!(interner.push("<i/>"), 2);
        assert_eq!(interner.push("<b/>"), 1);
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.get("<i/>"), Some(2));
        assert_eq!(interner.get("<u/>"), None);
    }

    #[test]
    fn test_custom_start() {
        let mut interner = RuleInterner::with_start(164);
        assert_eq!(interner.push("0.00"), 164);
        assert_eq!(interner.push("0%"), 165);
        assert_eq!(interner.start(), 164);
    }

    #[test]
    fn test_rules_substitute_ids() {
        let mut interner = RuleInterner::with_id_token(164);
        interner.push(r#"<numFmt numFmtId="{#id}" formatCode="0.00"/>"#);
        interner.push(r#"<numFmt numFmtId="{#id}" formatCode="0%"/>"#);
        interner.push("plain");

        assert_eq!(
            interner.rules(),
            vec![
                r#"<numFmt numFmtId="164" formatCode="0.00"/>"#.to_string(),
                r#"<numFmt numFmtId="165" formatCode="0%"/>"#.to_string(),
                "plain".to_string(),
            ]
        );
    }

    #[test]
    fn test_only_first_token_is_substituted() {
        let mut interner = RuleInterner::with_id_token(164);
        interner.push(r#"<numFmt numFmtId="{#id}" formatCode="0 &quot;{#id}&quot;"/>"#);
        assert_eq!(
            interner.rules(),
            vec![r#"<numFmt numFmtId="164" formatCode="0 &quot;{#id}&quot;"/>"#.to_string()]
        );
    }

    #[test]
    fn test_rules_without_id_token_are_verbatim() {
        let mut interner = RuleInterner::new();
        interner.push(r#"<font><name val="{#id}"/></font>"#);
        assert_eq!(
            interner.rules(),
            vec![r#"<font><name val="{#id}"/></font>"#.to_string()]
        );
    }

    #[test]
    fn test_empty() {
        let interner = RuleInterner::default();
        assert!(interner.is_empty());
        assert!(interner.rules().is_empty());
    }
}
