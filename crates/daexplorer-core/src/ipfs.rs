//! Detection of IPFS and IPNS hosted deployments.
//!
//! When the explorer is served from `/ipns/<chain>.<domain>/`, the leading
//! label of the DNS-link names the chain to connect to.

/// Details extracted from the current location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpfsDetails {
    pub ipfs_hash: Option<String>,
    /// Chain label of an IPNS DNS-link, e.g. `polygon-da` in
    /// `polygon-da.dotapps.io`.
    pub ipns_chain: Option<String>,
    pub ipns_domain: Option<String>,
    pub is_ipfs: bool,
    pub is_ipns: bool,
}

/// First path segment following `marker` in `href`, if non-empty.
fn segment_after<'a>(href: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = href.split_once(marker)?;
    rest.split(['/', '?', '#'])
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Extract IPFS/IPNS details from a location href.
///
/// Only the part before the `#` route is inspected.
pub fn extract_ipfs_details(href: &str) -> IpfsDetails {
    let href = href.split_once('#').map_or(href, |(head, _)| head);
    let is_ipfs = href.contains("/ipfs/");
    let is_ipns = href.contains("/ipns/");
    let mut details = IpfsDetails {
        is_ipfs,
        is_ipns,
        ..IpfsDetails::default()
    };

    if is_ipfs {
        details.ipfs_hash = segment_after(href, "/ipfs/").map(str::to_string);
    } else if is_ipns {
        if let Some(dnslink) = segment_after(href, "/ipns/") {
            let labels: Vec<&str> = dnslink.split('.').collect();
            if labels.len() > 2 {
                details.ipns_chain = Some(labels[0].to_string());
                details.ipns_domain = Some(labels[1..].join("."));
            } else {
                details.ipns_domain = Some(dnslink.to_string());
            }
        }
    }

    tracing::trace!(?details, "Extracted IPFS details");
    details
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_http_location() {
        let details = extract_ipfs_details("http://localhost:3000/#/explorer");
        assert_eq!(details, IpfsDetails::default());
    }

    #[test]
    fn test_ipfs_hash() {
        let details = extract_ipfs_details("https://gateway.example/ipfs/QmHash/#/explorer");
        assert!(details.is_ipfs);
        assert_eq!(details.ipfs_hash.as_deref(), Some("QmHash"));
        assert!(details.ipns_chain.is_none());
    }

    #[test]
    fn test_ipns_chain_and_domain() {
        let details =
            extract_ipfs_details("https://gateway.example/ipns/polygon-da.dotapps.io/#/explorer");
        assert!(details.is_ipns);
        assert_eq!(details.ipns_chain.as_deref(), Some("polygon-da"));
        assert_eq!(details.ipns_domain.as_deref(), Some("dotapps.io"));
    }

    #[test]
    fn test_ipns_bare_domain_has_no_chain() {
        let details = extract_ipfs_details("https://gateway.example/ipns/dotapps.io/");
        assert!(details.ipns_chain.is_none());
        assert_eq!(details.ipns_domain.as_deref(), Some("dotapps.io"));
    }

    #[test]
    fn test_ipns_empty_segment() {
        let details = extract_ipfs_details("https://gateway.example/ipns/");
        assert!(details.is_ipns);
        assert!(details.ipns_domain.is_none());
    }

    #[test]
    fn test_ipfs_route_in_fragment_is_ignored() {
        let details =
            extract_ipfs_details("https://gw.example/ipns/avail.dotapps.io/#/ipfs/QmX");
        assert!(!details.is_ipfs);
        assert!(details.is_ipns);
        assert_eq!(details.ipns_chain.as_deref(), Some("avail"));
    }

    #[test]
    fn test_ipns_route_in_fragment_is_ignored() {
        let details = extract_ipfs_details("http://localhost:3000/#/ipns/avail.dotapps.io/");
        assert_eq!(details, IpfsDetails::default());
    }

    proptest::proptest! {
        #[test]
        fn prop_ipns_chain_is_first_label(
            chain in "[a-z][a-z0-9-]{0,12}",
            domain in "[a-z]{1,10}\\.[a-z]{2,4}",
            route in "(#/[a-z]{0,8})?",
        ) {
            let href = format!("https://gw.example/ipns/{}.{}/{}", chain, domain, route);
            let details = extract_ipfs_details(&href);
            proptest::prop_assert_eq!(details.ipns_chain, Some(chain));
            proptest::prop_assert_eq!(details.ipns_domain, Some(domain));
        }
    }
}
