/// The parsed contents of a chart repository `index.yaml`
///
/// Only the entry keys matter for verification. They are kept verbatim,
/// in the order they appear in the document, so a run always checks (and
/// numbers) the charts the same way. Whether a key is usable as a chart
/// name is decided per entry when it is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartIndex {
    api_version: Option<String>,
    generated: Option<String>,
    charts: Vec<String>,
}

impl ChartIndex {
    pub fn new(charts: Vec<String>) -> Self {
        Self {
            api_version: None,
            generated: None,
            charts,
        }
    }

    pub fn with_api_version(mut self, api_version: Option<String>) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn with_generated(mut self, generated: Option<String>) -> Self {
        self.generated = generated;
        self
    }

    pub fn charts(&self) -> &[String] {
        &self.charts
    }

    pub fn into_charts(self) -> Vec<String> {
        self.charts
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_chart_index_keeps_order() {
        let index = ChartIndex::new(names(&["zookeeper", "apache", "mysql"]));
        assert_eq!(index.charts(), &["zookeeper", "apache", "mysql"]);
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_chart_index_keeps_unusual_keys() {
        let index = ChartIndex::new(names(&["alpha", "my chart", "--help"]));
        assert_eq!(index.len(), 3);
        assert_eq!(index.charts()[1], "my chart");
    }

    #[test]
    fn test_chart_index_default_is_empty() {
        let index = ChartIndex::default();
        assert!(index.is_empty());
        assert!(index.api_version().is_none());
        assert!(index.generated().is_none());
    }

    #[test]
    fn test_chart_index_metadata() {
        let index = ChartIndex::new(vec![])
            .with_api_version(Some("v1".to_string()))
            .with_generated(Some("2018-03-01T00:00:00Z".to_string()));
        assert_eq!(index.api_version(), Some("v1"));
        assert_eq!(index.generated(), Some("2018-03-01T00:00:00Z"));
    }
}
