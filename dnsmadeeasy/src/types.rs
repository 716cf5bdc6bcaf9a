//! Request and response types for the DNS Made Easy V2.0 resource model.
//!
//! Optional fields are omitted from serialized bodies entirely when unset —
//! the server rejects spurious `null`s for several record types. Numeric
//! type-specific fields (MX level, SRV priority/weight/port) are therefore
//! `Option<u16>` so that "unset" and "zero" stay distinguishable.

use serde::{Deserialize, Serialize};

/// Server envelope for paginated list endpoints.
///
/// The library always fetches the full collection and hands back the `data`
/// slice; paging metadata is dropped.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

fn id_is_unset(id: &i64) -> bool {
    *id == 0
}

// ============ Domains ============

/// A managed (primary) domain.
///
/// `name` is immutable after creation; everything else is mutable through
/// [`update_domain`](crate::DmeClient::update_domain), which sends the full
/// value back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Domain {
    /// Server-assigned ID. Zero means "not yet created"; the field is
    /// omitted from request bodies in that case.
    #[serde(skip_serializing_if = "id_is_unset")]
    pub id: i64,
    /// Domain name, e.g. `"example.org"`.
    pub name: String,
    /// Vanity nameserver set applied to this domain, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vanity_id: Option<i64>,
    /// SOA template applied to this domain, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_id: Option<i64>,
    /// Folder containing this domain, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    /// AXFR transfer ACL applied to this domain, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_acl_id: Option<i64>,
    /// Whether Global Traffic Director is active for this domain.
    pub gtd_enabled: bool,
    /// Creation time, epoch milliseconds.
    pub created: i64,
    /// Last update time, epoch milliseconds.
    pub updated: i64,
    /// ID of a pending server-side action on this domain, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_action_id: Option<i64>,
}

/// Body of `POST dns/managed` — only the name may be supplied at creation.
#[derive(Debug, Serialize)]
pub(crate) struct NewDomain<'a> {
    pub name: &'a str,
}

// ============ Records ============

/// The record types the service accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address.
    #[default]
    A,
    /// IPv6 address.
    Aaaa,
    /// Canonical name.
    Cname,
    /// CNAME-at-apex surrogate, resolved to A/AAAA at query time.
    Aname,
    /// Mail exchange. Requires [`Record::mx_level`].
    Mx,
    /// Text data.
    Txt,
    /// Sender Policy Framework text record.
    Spf,
    /// Reverse pointer.
    Ptr,
    /// Delegation nameserver.
    Ns,
    /// Service locator. Requires [`Record::priority`], [`Record::weight`]
    /// and [`Record::port`].
    Srv,
    /// HTTP redirection record. Requires [`Record::redirect_type`].
    Httpred,
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Aname => "ANAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Spf => "SPF",
            Self::Ptr => "PTR",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Httpred => "HTTPRED",
        };
        f.write_str(s)
    }
}

/// A DNS record inside a managed domain.
///
/// One struct covers every type; the `record_type` discriminator decides
/// which of the optional type-specific fields apply. Fields that do not
/// apply must stay `None` — they are then left out of the wire body.
/// Which fields a type requires is enforced in
/// [`add_record`](crate::DmeClient::add_record).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    /// Server-assigned ID, unique within the domain. Zero means "not yet
    /// created" and is omitted from request bodies.
    #[serde(skip_serializing_if = "id_is_unset")]
    pub id: i64,
    /// Record type. Immutable after creation.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Subdomain label. Empty for an apex record.
    pub name: String,
    /// Record value (address, target hostname, text, or redirect URL).
    pub value: String,
    /// Time to live in seconds. Must be positive.
    pub ttl: u32,
    /// Global Traffic Director region, `"DEFAULT"` for non-geographic
    /// routing.
    pub gtd_location: String,
    /// Source template ID, overwritten by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
    /// Whether system monitoring is attached; managed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<bool>,
    /// Whether dynamic DNS is enabled for this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_dns: Option<bool>,

    // MX
    /// Mail exchange priority; lower is preferred. MX only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_level: Option<u16>,

    // SRV
    /// Service priority; lower is preferred. SRV only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// Load-balancing weight among same-priority targets. SRV only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    /// Service port. SRV only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    // HTTPRED
    /// Keep the original path on redirect. HTTPRED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_link: Option<bool>,
    /// Redirect flavour, e.g. `"STANDARD - 301"`. HTTPRED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_type: Option<String>,
    /// Page title served on the interstitial. HTTPRED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta keywords. HTTPRED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Meta description. HTTPRED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record {
    /// Compare the caller-controlled fields of two records and name the
    /// ones that differ.
    ///
    /// Covers `{type, name, value, ttl, gtdLocation}` plus the extras for
    /// the record type, and ignores everything the server overwrites (ID,
    /// source template, monitor state). An absent optional field equals an
    /// absent field and differs from an explicit zero.
    pub fn mismatches(&self, other: &Self) -> Vec<&'static str> {
        let mut diffs = Vec::new();
        if self.record_type != other.record_type {
            diffs.push("type");
        }
        if self.name != other.name {
            diffs.push("name");
        }
        if self.value != other.value {
            diffs.push("value");
        }
        if self.ttl != other.ttl {
            diffs.push("ttl");
        }
        if self.gtd_location != other.gtd_location {
            diffs.push("gtdLocation");
        }

        match self.record_type {
            RecordType::Mx => {
                if self.mx_level != other.mx_level {
                    diffs.push("mxLevel");
                }
            }
            RecordType::Srv => {
                if self.priority != other.priority {
                    diffs.push("priority");
                }
                if self.weight != other.weight {
                    diffs.push("weight");
                }
                if self.port != other.port {
                    diffs.push("port");
                }
            }
            RecordType::Httpred => {
                if self.hard_link != other.hard_link {
                    diffs.push("hardLink");
                }
                if self.redirect_type != other.redirect_type {
                    diffs.push("redirectType");
                }
                if self.title != other.title {
                    diffs.push("title");
                }
                if self.keywords != other.keywords {
                    diffs.push("keywords");
                }
                if self.description != other.description {
                    diffs.push("description");
                }
            }
            _ => {}
        }
        diffs
    }
}

// ============ SOA templates ============

/// A start-of-authority template, reusable across domains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Soa {
    /// Server-assigned ID.
    #[serde(skip_serializing_if = "id_is_unset")]
    pub id: i64,
    /// Template name.
    pub name: String,
    /// Primary nameserver host.
    pub comp: String,
    /// Responsible-party contact, in DNS mailbox form.
    pub email: String,
    /// SOA record TTL in seconds.
    pub ttl: u32,
    /// Zone serial number.
    pub serial: u32,
    /// Secondary refresh interval in seconds.
    pub refresh: u32,
    /// Retry interval in seconds.
    pub retry: u32,
    /// Expiry in seconds.
    pub expire: u32,
    /// Negative-caching TTL in seconds.
    pub negative_cache: u32,
}

// ============ Vanity nameserver sets ============

/// A named list of nameserver hostnames presented as the authoritative NS
/// RRset for domains that reference it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vanity {
    /// Server-assigned ID.
    #[serde(skip_serializing_if = "id_is_unset")]
    pub id: i64,
    /// Set name.
    pub name: String,
    /// Nameserver hostnames.
    pub servers: Vec<String>,
    /// Nameserver group the hostnames belong to.
    pub name_server_group_id: i64,
    /// Whether the set is visible to other accounts.
    pub public: bool,
}

// ============ Secondary DNS ============

/// A named list of IP literals used as AXFR transfer sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IpSet {
    /// Server-assigned ID.
    #[serde(skip_serializing_if = "id_is_unset")]
    pub id: i64,
    /// Set name.
    pub name: String,
    /// Transfer-source IP literals.
    pub ips: Vec<String>,
}

/// A secondary domain, transferred from the IP addresses of its
/// [`IpSet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecondaryDomain {
    /// Server-assigned ID.
    #[serde(skip_serializing_if = "id_is_unset")]
    pub id: i64,
    /// Domain name.
    pub name: String,
    /// IP set providing the AXFR sources.
    pub ip_set_id: i64,
    /// Folder containing this domain, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
}

/// An organizational folder. Read-only; `value` is the folder's ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Folder {
    /// Folder ID.
    pub value: i64,
    /// Display label.
    pub label: String,
}
