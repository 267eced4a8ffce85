//! FASTA bodies as returned by UniProt.

/// Concatenate the sequence lines of a FASTA body, dropping `>` headers.
///
/// Returns `None` when the body holds no sequence at all.
pub fn parse_fasta_sequence(body: &str) -> Option<String> {
    let sequence: String = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('>'))
        .collect();
    (!sequence.is_empty()).then_some(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_stripped_lines_joined() {
        let body = ">sp|P38398|BRCA1_HUMAN Breast cancer type 1\nMDLSALRVEE\nVQNVINAMQK\n";
        assert_eq!(parse_fasta_sequence(body).as_deref(), Some("MDLSALRVEEVQNVINAMQK"));
    }

    #[test]
    fn empty_or_header_only_is_none() {
        assert_eq!(parse_fasta_sequence(""), None);
        assert_eq!(parse_fasta_sequence(">sp|X|Y\n\n"), None);
    }

    #[test]
    fn crlf_lines_trimmed() {
        assert_eq!(parse_fasta_sequence(">h\r\nMA\r\nKL\r\n").as_deref(), Some("MAKL"));
    }
}
