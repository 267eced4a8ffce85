//! NCBI Entrez gene records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ppinet_core::PpiResult;

use crate::client::HttpClient;
use crate::config::FetchConfig;

/// Gene properties taken from an Entrez gene summary.
///
/// Fields the record does not carry are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneProperties {
    /// Entrez gene ID.
    pub entrez_id: String,
    /// Official symbol, or the record name when there is none.
    pub gene_symbol: String,
    /// Full gene name.
    pub gene_name: String,
    /// Scientific organism name.
    pub organism: String,
    /// Chromosome.
    pub chromosome: String,
    /// Cytogenetic location.
    pub map_location: String,
    /// Gene type such as `protein-coding`.
    pub gene_type: String,
    /// RefSeq summary.
    pub summary: String,
    /// Comma-separated aliases.
    pub other_aliases: String,
    /// Other names.
    pub other_designations: String,
    /// Chromosome accession of the first genomic location.
    pub chr_accession: String,
    /// Start coordinate of the first genomic location.
    pub chr_start: String,
    /// Stop coordinate of the first genomic location.
    pub chr_stop: String,
}

impl GeneProperties {
    /// Column names, in field order.
    pub const COLUMNS: [&'static str; 13] = [
        "entrez_id",
        "gene_symbol",
        "gene_name",
        "organism",
        "chromosome",
        "map_location",
        "gene_type",
        "summary",
        "other_aliases",
        "other_designations",
        "chr_accession",
        "chr_start",
        "chr_stop",
    ];

    /// Field values in [`GeneProperties::COLUMNS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.entrez_id.clone(),
            self.gene_symbol.clone(),
            self.gene_name.clone(),
            self.organism.clone(),
            self.chromosome.clone(),
            self.map_location.clone(),
            self.gene_type.clone(),
            self.summary.clone(),
            self.other_aliases.clone(),
            self.other_designations.clone(),
            self.chr_accession.clone(),
            self.chr_start.clone(),
            self.chr_stop.clone(),
        ]
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Extract the record for `entrez_id` from an `esummary` JSON body.
///
/// Returns `None` when the body has no record for that ID or the record
/// carries an `error` entry.
pub fn parse_gene_summary(body: &Value, entrez_id: &str) -> Option<GeneProperties> {
    let record = body.get("result")?.get(entrez_id)?;
    if record.get("error").is_some() {
        return None;
    }

    let symbol = text(record.get("nomenclaturesymbol"));
    let genomic = record
        .get("genomicinfo")
        .and_then(Value::as_array)
        .and_then(|infos| infos.first());

    Some(GeneProperties {
        entrez_id: match text(record.get("uid")) {
            uid if uid.is_empty() => entrez_id.to_string(),
            uid => uid,
        },
        gene_symbol: if symbol.is_empty() {
            text(record.get("name"))
        } else {
            symbol
        },
        gene_name: text(record.get("description")),
        organism: text(record.get("organism").and_then(|o| o.get("scientificname"))),
        chromosome: text(record.get("chromosome")),
        map_location: text(record.get("maplocation")),
        gene_type: text(record.get("genetype")),
        summary: text(record.get("summary")),
        other_aliases: text(record.get("otheraliases")),
        other_designations: text(record.get("otherdesignations")),
        chr_accession: text(genomic.and_then(|g| g.get("chraccver"))),
        chr_start: text(genomic.and_then(|g| g.get("chrstart"))),
        chr_stop: text(genomic.and_then(|g| g.get("chrstop"))),
    })
}

/// Client for the Entrez `esummary` and `efetch` endpoints.
#[derive(Debug, Clone)]
pub struct NcbiClient {
    http: HttpClient,
    base_url: String,
    email: Option<String>,
    api_key: Option<String>,
    tool: String,
}

impl NcbiClient {
    /// Build a client from `config`.
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            base_url: config.ncbi_base_url.trim_end_matches('/').to_string(),
            email: config.email.clone(),
            api_key: config.ncbi_api_key.clone(),
            tool: config.tool.clone(),
        }
    }

    fn params<'a>(&'a self, entrez_id: &'a str, retmode: &'a str) -> Vec<(&'a str, &'a str)> {
        let mut params = vec![("db", "gene"), ("id", entrez_id), ("retmode", retmode), ("tool", self.tool.as_str())];
        if let Some(email) = &self.email {
            params.push(("email", email.as_str()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.as_str()));
        }
        params
    }

    /// Summary properties of one gene.
    pub fn gene_properties(&self, entrez_id: &str) -> PpiResult<Option<GeneProperties>> {
        let url = format!("{}/esummary.fcgi", self.base_url);
        let body: Option<Value> = self.http.get_json(&url, &self.params(entrez_id, "json"))?;
        Ok(body.and_then(|b| parse_gene_summary(&b, entrez_id)))
    }

    /// Full gene record as Entrez XML.
    pub fn gene_record_xml(&self, entrez_id: &str) -> PpiResult<Option<String>> {
        let url = format!("{}/efetch.fcgi", self.base_url);
        self.http
            .get_text(&url, &self.params(entrez_id, "xml"), "application/xml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brca1() -> Value {
        serde_json::json!({
            "header": {"type": "esummary", "version": "0.3"},
            "result": {
                "uids": ["672"],
                "672": {
                    "uid": "672",
                    "name": "BRCA1",
                    "description": "BRCA1 DNA repair associated",
                    "nomenclaturesymbol": "BRCA1",
                    "organism": {"scientificname": "Homo sapiens", "taxid": 9606},
                    "chromosome": "17",
                    "maplocation": "17q21.31",
                    "otheraliases": "BRCAI, BRCC1",
                    "otherdesignations": "breast cancer type 1 susceptibility protein",
                    "summary": "This gene encodes a nuclear phosphoprotein.",
                    "genomicinfo": [
                        {"chrloc": "17", "chraccver": "NC_000017.11", "chrstart": 43125482, "chrstop": 43044294}
                    ]
                }
            }
        })
    }

    #[test]
    fn summary_fields_mapped() {
        let g = parse_gene_summary(&brca1(), "672").unwrap();
        assert_eq!(g.entrez_id, "672");
        assert_eq!(g.gene_symbol, "BRCA1");
        assert_eq!(g.gene_name, "BRCA1 DNA repair associated");
        assert_eq!(g.organism, "Homo sapiens");
        assert_eq!(g.map_location, "17q21.31");
        assert_eq!(g.chr_accession, "NC_000017.11");
        assert_eq!(g.chr_start, "43125482");
        assert_eq!(g.chr_stop, "43044294");
        assert_eq!(g.gene_type, "");
    }

    #[test]
    fn symbol_falls_back_to_name() {
        let mut body = brca1();
        body["result"]["672"]["nomenclaturesymbol"] = Value::String(String::new());
        body["result"]["672"]["name"] = Value::String("LOC672".into());
        assert_eq!(parse_gene_summary(&body, "672").unwrap().gene_symbol, "LOC672");
    }

    #[test]
    fn sparse_record_degrades_to_empty() {
        let body = serde_json::json!({"result": {"99": {"uid": "99"}}});
        let g = parse_gene_summary(&body, "99").unwrap();
        assert_eq!(g.entrez_id, "99");
        assert!(g.gene_symbol.is_empty());
        assert!(g.chr_accession.is_empty());
    }

    #[test]
    fn unknown_or_error_record_is_none() {
        assert!(parse_gene_summary(&brca1(), "1").is_none());
        let body = serde_json::json!({"result": {"5": {"uid": "5", "error": "cannot get document summary"}}});
        assert!(parse_gene_summary(&body, "5").is_none());
    }

    #[test]
    fn row_matches_columns() {
        let g = parse_gene_summary(&brca1(), "672").unwrap();
        assert_eq!(g.to_row().len(), GeneProperties::COLUMNS.len());
        assert_eq!(g.to_row()[1], "BRCA1");
    }

    #[test]
    fn query_params_include_credentials() {
        let client = NcbiClient::new(&FetchConfig::new().email("a@b.c").ncbi_api_key("k"));
        let params = client.params("672", "json");
        assert!(params.contains(&("email", "a@b.c")));
        assert!(params.contains(&("api_key", "k")));
        assert!(params.contains(&("id", "672")));
    }
}
