use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{map_parse_err, Result};
use crate::rcode::{self, Status};
use crate::rr_types::{self, RecordType};

// An entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    name: String,
    #[serde(rename = "type")]
    q_type: u16,
}

impl Question {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn q_type(&self) -> u16 {
        self.q_type
    }
}

// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// The record as it appears on the wire, before annotation.
#[derive(Deserialize)]
struct RawAnswer {
    name: String,
    #[serde(rename = "type")]
    r_type: u16,
    #[serde(rename = "TTL", default, deserialize_with = "null_as_default")]
    ttl: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    data: String,
}

// An entry of the answer or authority section. The type mnemonic and meaning are
// looked up from the record type table while the record is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAnswer")]
pub struct Answer {
    name: String,
    r_type: u16,
    ttl: u32,
    data: String,
    type_info: RecordType,
}

impl From<RawAnswer> for Answer {
    fn from(raw: RawAnswer) -> Answer {
        Answer {
            type_info: rr_types::lookup(raw.r_type),
            name: raw.name,
            r_type: raw.r_type,
            ttl: raw.ttl,
            data: raw.data,
        }
    }
}

impl Answer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn r_type(&self) -> u16 {
        self.r_type
    }

    pub fn type_name(&self) -> &'static str {
        self.type_info.name
    }

    pub fn type_meaning(&self) -> &'static str {
        self.type_info.meaning
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(rename = "Status")]
    status_code: u16,
    #[serde(rename = "TC", default, deserialize_with = "null_as_default")]
    truncated: bool,
    #[serde(rename = "RD", default, deserialize_with = "null_as_default")]
    recursion_desired: bool,
    #[serde(rename = "RA", default, deserialize_with = "null_as_default")]
    recursion_available: bool,
    #[serde(rename = "AD", default, deserialize_with = "null_as_default")]
    authenticated_data: bool,
    #[serde(rename = "CD", default, deserialize_with = "null_as_default")]
    checking_disabled: bool,
    #[serde(rename = "Question", default, deserialize_with = "null_as_default")]
    questions: Vec<Question>,
    #[serde(rename = "Answer", default, deserialize_with = "null_as_default")]
    answers: Vec<Answer>,
    #[serde(rename = "Authority", default, deserialize_with = "null_as_default")]
    authorities: Vec<Answer>,
    // Only some providers (Google) send these.
    #[serde(rename = "Additional", default, deserialize_with = "null_as_default")]
    additionals: Vec<Value>,
    #[serde(default)]
    edns_client_subnet: Option<String>,
    #[serde(rename = "Comment", default)]
    comment: Option<String>,
}

/// The normalized DoH JSON answer shared by every provider.
///
/// The status text and the type text of every record are looked up while the body
/// is deserialized, so they always match the codes they were computed from, no
/// matter whether the value comes from [`QueryResponse::from_json`] or from serde.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawResponse")]
pub struct QueryResponse {
    status_code: u16,
    status: Status,
    truncated: bool,
    recursion_desired: bool,
    recursion_available: bool,
    authenticated_data: bool,
    checking_disabled: bool,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    authorities: Vec<Answer>,
    additionals: Vec<Value>,
    edns_client_subnet: Option<String>,
    comment: Option<String>,
}

impl From<RawResponse> for QueryResponse {
    fn from(raw: RawResponse) -> QueryResponse {
        QueryResponse {
            status_code: raw.status_code,
            status: rcode::lookup(raw.status_code),
            truncated: raw.truncated,
            recursion_desired: raw.recursion_desired,
            recursion_available: raw.recursion_available,
            authenticated_data: raw.authenticated_data,
            checking_disabled: raw.checking_disabled,
            questions: raw.questions,
            answers: raw.answers,
            authorities: raw.authorities,
            additionals: raw.additionals,
            edns_client_subnet: raw.edns_client_subnet,
            comment: raw.comment,
        }
    }
}

impl QueryResponse {
    // Parses and annotates a DoH JSON body.
    pub fn from_json(body: &[u8]) -> Result<QueryResponse> {
        serde_json::from_slice(body).map_err(|e| map_parse_err(&e))
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_name(&self) -> &'static str {
        self.status.name
    }

    pub fn status_message(&self) -> &'static str {
        self.status.message
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn recursion_desired(&self) -> bool {
        self.recursion_desired
    }

    pub fn recursion_available(&self) -> bool {
        self.recursion_available
    }

    pub fn authenticated_data(&self) -> bool {
        self.authenticated_data
    }

    pub fn checking_disabled(&self) -> bool {
        self.checking_disabled
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn authorities(&self) -> &[Answer] {
        &self.authorities
    }

    pub fn additionals(&self) -> &[Value] {
        &self.additionals
    }

    pub fn edns_client_subnet(&self) -> Option<&str> {
        self.edns_client_subnet.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
