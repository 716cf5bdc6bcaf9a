// Shared helpers for the sandbox tests. These tests run against the real
// DNS Made Easy sandbox and are skipped unless credentials are present in
// the environment:
//
//   DME_API_KEY              sandbox API key
//   DME_SECRET_KEY           sandbox secret key
//   DME_TIME_OFFSET_SECS     optional clock-skew compensation in seconds

use std::time::Duration;

use dnsmadeeasy::{DmeClient, Record, RecordType};

/// Domain deletion in the sandbox takes tens of seconds to propagate.
pub const DELETION_DEADLINE: Duration = Duration::from_secs(120);

/// Build a sandbox client from the environment, or `None` to skip.
pub fn sandbox_client() -> Option<DmeClient> {
    let api_key = std::env::var("DME_API_KEY").ok()?;
    let secret_key = std::env::var("DME_SECRET_KEY").ok()?;

    let mut builder = DmeClient::builder(api_key, secret_key).sandbox();
    if let Some(secs) = std::env::var("DME_TIME_OFFSET_SECS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
    {
        builder = builder.clock_offset(chrono::Duration::seconds(secs));
    }
    match builder.build() {
        Ok(client) => Some(client),
        Err(e) => panic!("sandbox credentials present but client build failed: {e}"),
    }
}

/// A unique throwaway domain name. Uniqueness matters because a deleted
/// domain's name stays reserved until the deletion propagates.
pub fn unique_domain_name() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("dme-test-{nanos}.org")
}

/// Delete every listed domain concurrently and wait for each to vanish.
pub async fn remove_domains(client: &DmeClient, ids: &[i64]) {
    let results = futures::future::join_all(
        ids.iter()
            .map(|&id| client.delete_domain_and_wait(id, DELETION_DEADLINE)),
    )
    .await;
    for (id, result) in ids.iter().zip(results) {
        if let Err(e) = result {
            panic!("cleanup of domain {id} failed: {e}");
        }
    }
}

fn record(record_type: RecordType, name: &str, value: &str, ttl: u32) -> Record {
    Record {
        record_type,
        name: name.to_string(),
        value: value.to_string(),
        ttl,
        gtd_location: "DEFAULT".to_string(),
        ..Record::default()
    }
}

/// One (create, update) pair per record type the service accepts. The
/// update keeps type and name and changes the mutable fields.
pub fn record_fixtures() -> Vec<(Record, Record)> {
    let mut fixtures = Vec::new();

    fixtures.push((
        record(RecordType::A, "testa", "127.8.4.3", 300),
        record(RecordType::A, "testa", "10.85.67.244", 1800),
    ));
    fixtures.push((
        record(RecordType::Aaaa, "testaaaa", "fe80::1", 300),
        record(RecordType::Aaaa, "testaaaa", "fe80::2", 1800),
    ));
    fixtures.push((
        record(RecordType::Cname, "testcname", "testa", 300),
        record(RecordType::Cname, "testcname", "testaaaa", 1800),
    ));
    fixtures.push((
        record(RecordType::Aname, "testaname", "example.org.", 300),
        record(RecordType::Aname, "testaname", "www.example.org.", 1800),
    ));
    fixtures.push((
        Record {
            mx_level: Some(10),
            ..record(RecordType::Mx, "testmx", "mail.example.org.", 300)
        },
        Record {
            mx_level: Some(20),
            ..record(RecordType::Mx, "testmx", "mail2.example.org.", 1800)
        },
    ));
    fixtures.push((
        record(RecordType::Txt, "testtxt", "\"just some text\"", 300),
        record(RecordType::Txt, "testtxt", "\"some other text\"", 1800),
    ));
    fixtures.push((
        record(RecordType::Spf, "testspf", "\"v=spf1 -all\"", 300),
        record(RecordType::Spf, "testspf", "\"v=spf1 mx -all\"", 1800),
    ));
    fixtures.push((
        record(RecordType::Ptr, "4", "testa.example.org.", 300),
        record(RecordType::Ptr, "4", "testaaaa.example.org.", 1800),
    ));
    fixtures.push((
        record(RecordType::Ns, "testns", "ns1.example.org.", 300),
        record(RecordType::Ns, "testns", "ns2.example.org.", 1800),
    ));
    fixtures.push((
        Record {
            priority: Some(10),
            weight: Some(10),
            port: Some(80),
            ..record(RecordType::Srv, "_testsrv", "example.org.", 300)
        },
        Record {
            priority: Some(20),
            weight: Some(5),
            port: Some(8080),
            ..record(RecordType::Srv, "_testsrv", "www.example.org.", 1800)
        },
    ));
    fixtures.push((
        Record {
            hard_link: Some(false),
            redirect_type: Some("STANDARD - 301".to_string()),
            title: Some("testing".to_string()),
            keywords: Some("just,stuff".to_string()),
            description: Some("just doin some stuff".to_string()),
            ..record(RecordType::Httpred, "testred", "http://example.org", 300)
        },
        Record {
            hard_link: Some(true),
            redirect_type: Some("STANDARD - 302".to_string()),
            title: Some("still testing".to_string()),
            keywords: Some("just,stuff".to_string()),
            description: Some("just doin some stuff".to_string()),
            ..record(RecordType::Httpred, "testred", "http://www.example.org", 1800)
        },
    ));

    fixtures
}
