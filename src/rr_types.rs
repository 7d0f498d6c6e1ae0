//! DNS resource record types, as registered in
//! <https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4>.

code_table!(
    // The mnemonic and meaning of a numeric record type.
    pub struct RecordType { meaning }

    fallback = (
        "UNASSIGNED/PRIVATE USE/RESERVED",
        "UNASSIGNED/PRIVATE USE/RESERVED"
    );

    1 => ("A", "A Host Address"),
    2 => ("NS", "An Authoritative Name Server"),
    3 => ("MD", "A Mail Destination"),
    4 => ("MF", "A Mail Forwarder"),
    5 => ("CNAME", "The Canonical Name For An Alias"),
    6 => ("SOA", "Marks The Start Of A Zone Of Authority"),
    7 => ("MB", "A Mailbox Domain Name"),
    8 => ("MG", "A Mail Group Member"),
    9 => ("MR", "A Mail Rename Domain Name"),
    10 => ("NULL", "A Null Resource Record"),
    11 => ("WKS", "A Well Known Service Description"),
    12 => ("PTR", "A Domain Name Pointer"),
    13 => ("HINFO", "Host Information"),
    14 => ("MINFO", "Mailbox Or Mail List Information"),
    15 => ("MX", "Mail Exchange"),
    16 => ("TXT", "Text Strings"),
    17 => ("RP", "For Responsible Person"),
    18 => ("AFSDB", "For AFS Data Base Location"),
    19 => ("X25", "For X.25 PSDN Address"),
    20 => ("ISDN", "For ISDN Address"),
    21 => ("RT", "For Route Through"),
    22 => ("NSAP", "For NSAP Address, NSAP Style A Record"),
    23 => ("NSAP-PTR", "For Domain Name Pointer, NSAP Style"),
    24 => ("SIG", "For Security Signature"),
    25 => ("KEY", "For Security Key"),
    26 => ("PX", "X.400 Mail Mapping Information"),
    27 => ("GPOS", "Geographical Position"),
    28 => ("AAAA", "IPV6 Address"),
    29 => ("LOC", "Location Information"),
    30 => ("NXT", "Next Domain"),
    31 => ("EID", "Endpoint Identifier"),
    32 => ("NIMLOC", "Nimrod Locator"),
    33 => ("SRV", "Server Selection"),
    34 => ("ATMA", "ATM Address"),
    35 => ("NAPTR", "Naming Authority Pointer"),
    36 => ("KX", "Key Exchanger"),
    37 => ("CERT", "CERT"),
    38 => ("A6", "A6"),
    39 => ("DNAME", "DNAME"),
    40 => ("SINK", "SINK"),
    41 => ("OPT", "OPT"),
    42 => ("APL", "APL"),
    43 => ("DS", "Delegation Signer"),
    44 => ("SSHFP", "SSH Key Fingerprint"),
    45 => ("IPSECKEY", "IPSECKEY"),
    46 => ("RRSIG", "RRSIG"),
    47 => ("NSEC", "NSEC"),
    48 => ("DNSKEY", "DNSKEY"),
    49 => ("DHCID", "DHCID"),
    50 => ("NSEC3", "NSEC3"),
    51 => ("NSEC3PARAM", "NSEC3PARAM"),
    52 => ("TLSA", "TLSA"),
    53 => ("SMIMEA", "S/MIME Certificate Association"),
    55 => ("HIP", "Host Identity Protocol"),
    56 => ("NINFO", "NINFO"),
    57 => ("RKEY", "RKEY"),
    58 => ("TALINK", "Trust Anchor LINK"),
    59 => ("CDS", "Child DS"),
    60 => ("CDNSKEY", "DNSKEY(s) The Child Wants Reflected In DS"),
    61 => ("OPENPGPKEY", "OpenPGP Key"),
    62 => ("CSYNC", "Child-To-Parent Sync"),
    63 => ("ZONEMD", "Message Digest For DNS Zone"),
    99 => ("SPF", ""),
    100 => ("UINFO", ""),
    101 => ("UID", ""),
    102 => ("GID", ""),
    103 => ("UNSPEC", ""),
    104 => ("NID", ""),
    105 => ("L32", ""),
    106 => ("L64", ""),
    107 => ("LP", ""),
    108 => ("EUI48", "An EUI-48 Address"),
    109 => ("EUI64", "An EUI-64 Address"),
    249 => ("TKEY", "Transaction Key"),
    250 => ("TSIG", "Transaction Signature"),
    251 => ("IXFR", "Incremental Transer"),
    252 => ("AXFR", "Transfer Of An Entire Zone"),
    253 => ("MAILB", "Mailbox-Related Resource Records"),
    254 => ("MAILA", "Mail Agent Resource Records"),
    255 => ("*", "A Request For Some Or All Records The Server Has Available"),
    256 => ("URI", "URI"),
    257 => ("CAA", "Certification Authority Restriction"),
    258 => ("AVC", "Application Visability And Control"),
    259 => ("DOA", "Digital Object Architecture"),
    260 => ("AMTRELAY", "Automatic Multicast Tunneling Relay"),
    32768 => ("TA", "DNSSEC Trust Authorities"),
    32769 => ("DLV", "DNSSEC Lookaside Validation"),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(
            lookup(1),
            RecordType {
                name: "A",
                meaning: "A Host Address"
            }
        );
        assert_eq!(lookup(28).name, "AAAA");
        assert_eq!(lookup(15).name, "MX");
        assert_eq!(lookup(255).name, "*");
        assert_eq!(lookup(32769).meaning, "DNSSEC Lookaside Validation");
    }

    #[test]
    fn test_every_table_entry_round_trips() {
        for &(code, name, meaning) in TABLE {
            let rr_type = lookup(code);
            assert_eq!(rr_type.name, name, "code {code}");
            assert_eq!(rr_type.meaning, meaning, "code {code}");
        }
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        let mut codes: Vec<u16> = TABLE.iter().map(|&(code, _, _)| code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), TABLE.len());
    }

    #[test]
    fn test_unlisted_types_fall_back() {
        for code in [0, 54, 64, 110, 248, 261, 32770, 65535] {
            assert_eq!(lookup(code), FALLBACK);
        }
        assert_eq!(FALLBACK.meaning, "UNASSIGNED/PRIVATE USE/RESERVED");
    }
}
