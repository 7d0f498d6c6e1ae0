//! DNS response codes, as registered in
//! <https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-6>.

code_table!(
    // The name and human readable message of a DNS response code.
    pub struct Status { message }

    fallback = (
        "UNASSIGNED/RESERVED",
        "Unassigned By IANA Or Reserved for Private Use (See Provider Documentation)"
    );

    0 => ("NOERROR", "No Errors Reported"),
    1 => ("FORMERR", "The DNS Query Is Malformed"),
    2 => ("SERVFAIL", "The DNS Server Failed To Process This Request"),
    3 => ("NXDOMAIN", "The Requested Domain Name Does Not Exist"),
    4 => ("NOTIMP", "This is not implimented"),
    5 => ("REFUSED", "The DNS Server Refused To Answer This Query"),
    6 => ("YXDOMAIN", "The Requested Domain Exists, But It Should Not"),
    7 => ("YXRRSET", "The Requested Resource Record Set Exists, But It Should Not"),
    8 => ("NXRRSET", "The Requested Resource Record Set Does Not Exist, But It Should"),
    9 => ("NOTAUTH", "Either The Server Or The Requesting User Is Not Authorized To Perform This Action"),
    10 => ("NOTZONE", "The Requested Name Does Not Exist In The Requested Zone"),
    11 => ("DSOTYPEENI", "DSO-TYPE: This Is Not Implimented"),
    16 => ("BADVERS/BADSIG", "The Request Used A Bad OPT Version Or The TSIG Signature Failed"),
    17 => ("BADKEY", "The Key Is Not Recognized"),
    18 => ("BADTIME", "The Signature Is Out Of The Time Window"),
    19 => ("BADMODE", "The Request Used A Bad TKEY Mode"),
    20 => ("BADNAME", "The Request Used A Duplicate Key Name"),
    21 => ("BADALG", "The Requested Algorithm Is Not Supported"),
    22 => ("BADTRUNC", "The Requested Truncation Was Malformed"),
    23 => ("BADCOOKIE", "The Server Cookie Is Bad Or Missing"),
    65535 => ("RESERVED", "Reserved By Standards Action: See Provider Documentation"),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(
            lookup(0),
            Status {
                name: "NOERROR",
                message: "No Errors Reported"
            }
        );
        assert_eq!(lookup(3).name, "NXDOMAIN");
        assert_eq!(lookup(16).name, "BADVERS/BADSIG");
        assert_eq!(lookup(65535).name, "RESERVED");
    }

    #[test]
    fn test_every_table_entry_round_trips() {
        for &(code, name, message) in TABLE {
            let status = lookup(code);
            assert_eq!(status.name, name, "code {code}");
            assert_eq!(status.message, message, "code {code}");
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
    fn test_unlisted_codes_fall_back() {
        for code in [12, 15, 24, 3840, 65534] {
            assert_eq!(lookup(code), FALLBACK);
        }
        assert_eq!(FALLBACK.name, "UNASSIGNED/RESERVED");
    }

    #[test]
    fn test_display() {
        assert_eq!(lookup(0).to_string(), "NOERROR: No Errors Reported");
    }
}
