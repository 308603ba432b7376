//! The two domain schemas under comparison.
//!
//! Both are plain serde structs decoded with `quick-xml`. Elements a schema does not
//! model are skipped, so either schema accepts any libvirt domain document and fills
//! in what it knows about.

use quick_xml::events::Event;
use quick_xml::{DeError, Reader};
use serde::de::DeserializeOwned;

use crate::schema::StaticSizes;

pub mod kubevirt;
pub mod libvirt;

/// A decodable domain representation.
pub trait DomainSchema: DeserializeOwned {
    /// Label used in logs, errors and table headers.
    const NAME: &'static str;

    fn decode(xml: &[u8]) -> Result<Self, DeError> {
        check_root(xml)?;
        quick_xml::de::from_reader(xml)
    }
}

const ROOT: &str = "domain";

/// Reject documents whose root element is not `<domain>`.
///
/// The deserializer accepts any root tag, so a `<network>` or `<pool>` definition
/// would otherwise decode into an empty domain. Syntax errors are left to the
/// deserializer.
fn check_root(xml: &[u8]) -> Result<(), DeError> {
    let mut reader = Reader::from_reader(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.local_name();
                if name.as_ref() == ROOT.as_bytes() {
                    return Ok(());
                }
                return Err(DeError::Custom(format!(
                    "expected element type <{ROOT}> but have <{}>",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            Ok(Event::Eof) | Err(_) => return Ok(()),
            Ok(_) => {}
        }
    }
}

impl DomainSchema for libvirt::Domain {
    const NAME: &'static str = "libvirtxml";
}

impl DomainSchema for kubevirt::DomainSpec {
    const NAME: &'static str = "kubevirt";
}

/// Schema A of every comparison.
pub type Primary = libvirt::Domain;
/// Schema B of every comparison.
pub type Secondary = kubevirt::DomainSpec;

pub fn static_sizes() -> StaticSizes {
    StaticSizes {
        primary: std::mem::size_of::<Primary>(),
        secondary: std::mem::size_of::<Secondary>(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const FEDORA_Q35: &str = include_str!("../../fixtures/domains/fedora-q35.xml");
    pub const MINIMAL: &str = include_str!("../../fixtures/domains/minimal.xml");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_sizes_are_nonzero() {
        let sizes = static_sizes();
        assert!(sizes.primary > 0);
        assert!(sizes.secondary > 0);
        assert_eq!(sizes, static_sizes());
    }

    #[test]
    fn both_schemas_accept_the_same_document() {
        for doc in [fixtures::FEDORA_Q35, fixtures::MINIMAL] {
            Primary::decode(doc.as_bytes()).unwrap();
            Secondary::decode(doc.as_bytes()).unwrap();
        }
    }

    #[test]
    fn decoding_is_deterministic() {
        let bytes = fixtures::FEDORA_Q35.as_bytes();
        assert_eq!(
            Primary::decode(bytes).unwrap(),
            Primary::decode(bytes).unwrap()
        );
        assert_eq!(
            Secondary::decode(bytes).unwrap(),
            Secondary::decode(bytes).unwrap()
        );
    }

    #[test]
    fn non_domain_root_fails_both_schemas() {
        let network = b"<network><name>default</name><bridge name='virbr0'/></network>";
        for err in [
            Primary::decode(network).unwrap_err(),
            Secondary::decode(network).unwrap_err(),
        ] {
            assert!(err.to_string().contains("expected element type <domain> but have <network>"));
        }
        assert!(Primary::decode(b"<pool type='dir'/>").is_err());
    }

    #[test]
    fn prolog_before_domain_root_is_accepted() {
        let xml = b"<?xml version='1.0'?>\n<!-- dumped by virsh -->\n<domain type='kvm'><name>vm</name></domain>";
        assert_eq!(Primary::decode(xml).unwrap().name, "vm");
        assert_eq!(Secondary::decode(xml).unwrap().name, "vm");
    }

    #[test]
    fn mismatched_tags_fail_both_schemas() {
        let broken = b"<domain type='kvm'><name>vm</domain>";
        assert!(Primary::decode(broken).is_err());
        assert!(Secondary::decode(broken).is_err());
    }
}
