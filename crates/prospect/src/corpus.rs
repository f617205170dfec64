use crate::normalize;
use crate::record::ProjectRecord;

/// The ordered collection of project records with their precomputed,
/// normalized matching documents.
///
/// Built once per dataset load and immutable afterwards: index position
/// doubles as the record id, which is what keeps similarity scores
/// (returned as an array aligned to corpus order) attributable. A new
/// dataset means a whole new corpus; there is no incremental update.
#[derive(Debug, Clone)]
pub struct Corpus {
  records: Vec<ProjectRecord>,
  documents: Vec<String>,
}

impl Corpus {
  /// Build a corpus from resolved records. Zero records yield an empty
  /// corpus; it is vector-space fitting that rejects emptiness, not the
  /// build itself.
  pub fn build(records: Vec<ProjectRecord>) -> Self {
    let documents =
      records.iter().map(|record| normalize::normalize(&record.document_text())).collect();

    Self { records, documents }
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Normalized document per record, in corpus order
  pub fn documents(&self) -> &[String] {
    &self.documents
  }

  pub fn records(&self) -> &[ProjectRecord] {
    &self.records
  }

  pub fn record(&self, id: usize) -> Option<&ProjectRecord> {
    self.records.get(id)
  }

  pub fn document(&self, id: usize) -> Option<&str> {
    self.documents.get(id).map(|d| d.as_str())
  }
}
