// Integration tests for `InventoryClient` against a mock inventory
// service.

mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::json;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use deployctl_api::resources::addresses::AddressOpts;
use deployctl_api::resources::dns::DnsOpts;
use deployctl_api::resources::hostfs::HostFilesystemOpts;
use deployctl_api::resources::ntp::NtpOpts;
use deployctl_api::resources::ptp_parameters::PtpParameterOpts;
use deployctl_api::{Error, InventoryClient, ListQuery, SortDir, TokenRefresher};
use secrecy::SecretString;

use support::{TEST_TOKEN, assert_json_eq, assert_multipart_eq, setup};

// ── Fixtures ────────────────────────────────────────────────────────

const DNS_UUID: &str = "e60b7d12-7585-486e-9c27-3d16e0daba09";
const SYSTEM_UUID: &str = "5af5f7e5-1eea-4e76-b539-ac552e132e47";
const FS_HOST_UUID: &str = "d99637e9-5451-45c6-98f4-f18968e43e91";
const ADDR_HOST_UUID: &str = "f757b5c7-6dc2-4e7f-b52a-fcafdfe26a42";
const POOL_UUID: &str = "5a74726d-5b1f-46f0-9410-c62a0f0e1d9d";
const PTP_PARAM_UUID: &str = "868e0ab8-d325-46d6-b4a4-83c67cf6bc49";

fn single_dns_body() -> serde_json::Value {
    json!({
        "uuid": DNS_UUID,
        "nameservers": "128.224.144.130,8.8.8.8",
        "isystem_uuid": SYSTEM_UUID,
        "forisystemid": 1,
        "created_at": "2019-08-07T14:42:02.781945+00:00",
        "updated_at": null
    })
}

fn single_filesystem_body() -> serde_json::Value {
    json!({
        "uuid": "9f03c985-e26d-488c-9b10-2e11ec4c52ae",
        "name": "backup",
        "size": 50,
        "logical_volume": "backup-lv",
        "ihost_uuid": FS_HOST_UUID,
        "forihostid": 2,
        "created_at": "2019-08-07T14:44:29.517344+00:00",
        "updated_at": null
    })
}

// ── DNS (S1) ────────────────────────────────────────────────────────

#[tokio::test]
async fn dns_update_sends_patch_and_decodes_entity() {
    let (server, client) = setup().await;

    let id: Uuid = DNS_UUID.parse().expect("dns uuid");
    let expected_patch = json!([
        {"op": "replace", "path": "/nameservers", "value": "128.224.144.130"}
    ]);

    Mock::given(method("PATCH"))
        .and(path(format!("/idns/{DNS_UUID}")))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .and(header("content-type", "application/json"))
        .and(body_json(&expected_patch))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_dns_body()))
        .mount(&server)
        .await;

    let opts = DnsOpts {
        nameservers: Some(vec!["128.224.144.130".into()]),
    };
    let dns = client.update_dns(&id, &opts).await.expect("dns update");

    assert_eq!(dns.uuid, id);
    assert_eq!(dns.nameservers, "128.224.144.130,8.8.8.8");
    assert_eq!(dns.updated_at, None);
}

#[tokio::test]
async fn dns_list_unwraps_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/idns"))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "idnss": [single_dns_body()] })),
        )
        .mount(&server)
        .await;

    let page = client.list_dns().await.expect("dns list");

    assert_eq!(page.len(), 1);
    assert!(!page.is_empty());
    assert_eq!(page.items[0].nameservers, "128.224.144.130,8.8.8.8");
}

// ── NTP: the "none" sentinel on the wire ────────────────────────────

#[tokio::test]
async fn ntp_update_clears_servers_with_none_sentinel() {
    let (server, client) = setup().await;

    let id = Uuid::new_v4();
    let expected_patch = json!([
        {"op": "replace", "path": "/ntpservers", "value": "none"}
    ]);

    Mock::given(method("PATCH"))
        .and(path(format!("/intp/{id}")))
        .and(body_json(&expected_patch))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": id,
            "ntpservers": "none",
            "isystem_uuid": SYSTEM_UUID,
            "created_at": null,
            "updated_at": null
        })))
        .mount(&server)
        .await;

    let ntp = client
        .update_ntp(
            &id,
            &NtpOpts {
                ntpservers: Some(vec![]),
            },
        )
        .await
        .expect("ntp update");

    assert_eq!(ntp.ntpservers, "none");
}

// ── Host filesystems (S2) ───────────────────────────────────────────

#[tokio::test]
async fn filesystem_bulk_update_wraps_single_patch_in_outer_list() {
    let (server, client) = setup().await;

    let host: Uuid = FS_HOST_UUID.parse().expect("host uuid");
    let expected_body = json!([[
        {"op": "replace", "path": "/name", "value": "Derp"},
        {"op": "replace", "path": "/size", "value": 50}
    ]]);

    Mock::given(method("PUT"))
        .and(path(format!("/ihosts/{FS_HOST_UUID}/host_fs/update_many")))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_filesystem_body()))
        .mount(&server)
        .await;

    let updates = vec![HostFilesystemOpts {
        name: Some("Derp".into()),
        size: Some(50),
    }];
    client
        .update_host_filesystems(&host, &updates)
        .await
        .expect("bulk update");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert_json_eq(&requests[0].body, &expected_body);
}

#[tokio::test]
async fn filesystem_list_and_get() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/ihosts/{FS_HOST_UUID}/host_fs")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "host_fs": [single_filesystem_body()] })),
        )
        .mount(&server)
        .await;

    let host: Uuid = FS_HOST_UUID.parse().expect("host uuid");
    let page = client
        .list_host_filesystems(&host, &ListQuery::default())
        .await
        .expect("fs list");

    assert_eq!(page.len(), 1);
    let fs = &page.items[0];
    assert_eq!(fs.name, "backup");
    assert_eq!(fs.size, 50);
    assert_eq!(fs.logical_volume, "backup-lv");
    assert_eq!(fs.ihost_uuid, host);
}

// ── Addresses (S3) ──────────────────────────────────────────────────

#[tokio::test]
async fn address_list_distinguishes_absent_pool_uuid() {
    let (server, client) = setup().await;

    let body = json!({
        "addresses": [
            {
                "uuid": "32bb8b4c-b315-4b93-8ce5-0d1e73eec2aa",
                "address": "192.168.204.3",
                "prefix": 24,
                "ifname": "mgmt0",
                "interface_uuid": "06a2bba4-2c76-48a2-9ddf-0d1e73eec2aa",
                "enable_dad": false,
                "forihostid": 1,
                "pool_uuid": POOL_UUID
            },
            {
                "uuid": "7dbbc285-6a18-4394-8e19-77e55699566d",
                "address": "fd00::3",
                "prefix": 64,
                "ifname": "oam0",
                "interface_uuid": "6e72d589-40f6-4fee-b19d-b2b2ba7a37e9",
                "enable_dad": true,
                "forihostid": 1,
                "pool_uuid": null
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path(format!("/ihosts/{ADDR_HOST_UUID}/addresses")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let host: Uuid = ADDR_HOST_UUID.parse().expect("host uuid");
    let page = client
        .list_addresses(&host, &ListQuery::default())
        .await
        .expect("address list");

    assert_eq!(page.len(), 2);
    assert_eq!(
        page.items[0].pool_uuid,
        Some(POOL_UUID.parse().expect("pool uuid"))
    );
    assert_eq!(page.items[1].pool_uuid, None);
}

#[tokio::test]
async fn address_create_omits_unset_fields() {
    let (server, client) = setup().await;

    let expected_body = json!({
        "interface_uuid": "06a2bba4-2c76-48a2-9ddf-0d1e73eec2aa",
        "address": "192.168.204.7",
        "prefix": 24
    });

    Mock::given(method("POST"))
        .and(path("/addresses"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "32bb8b4c-b315-4b93-8ce5-0d1e73eec2aa",
            "address": "192.168.204.7",
            "prefix": 24,
            "ifname": "mgmt0",
            "interface_uuid": "06a2bba4-2c76-48a2-9ddf-0d1e73eec2aa",
            "enable_dad": false,
            "pool_uuid": null
        })))
        .mount(&server)
        .await;

    let opts = AddressOpts {
        interface_uuid: Some("06a2bba4-2c76-48a2-9ddf-0d1e73eec2aa".into()),
        address: Some("192.168.204.7".into()),
        prefix: Some(24),
        ..AddressOpts::default()
    };
    let created = client.create_address(&opts).await.expect("address create");

    assert_eq!(created.address, "192.168.204.7");
    assert_eq!(created.pool_uuid, None);
}

#[tokio::test]
async fn address_delete_hits_item_url() {
    let (server, client) = setup().await;

    let id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/addresses/{id}")))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.delete_address(&id).await.expect("address delete");
}

// ── Certificates (S4) ───────────────────────────────────────────────

#[tokio::test]
async fn certificate_install_posts_multipart() {
    let (server, client) = setup().await;

    let response = json!({
        "success": "",
        "error": "",
        "body": "",
        "certificates": [{
            "uuid": "c986be37-4d55-4b4c-9b6b-bf4c96aa2e6c",
            "certtype": "ssl_ca",
            "signature": "ssl_ca_14617336624230451058",
            "start_date": "2020-01-01T00:00:00+00:00",
            "expiry_date": "2021-01-01T00:00:00+00:00"
        }]
    });

    Mock::given(method("POST"))
        .and(path("/certificate/certificate_install"))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(202).set_body_json(&response))
        .mount(&server)
        .await;

    let result = client
        .install_certificate("ssl_ca", "certificate.pem", "foobar".as_bytes())
        .await
        .expect("certificate install");

    assert!(!result.is_error());
    assert_eq!(result.success.as_deref(), Some(""));
    assert!(result.extra.contains_key("certificates"));

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .expect("content-type header");
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type: {content_type}"
    );

    assert_multipart_eq(
        &requests[0].body,
        "--generic-multipart-boundary\n\
         Content-Disposition: form-data; name=\"mode\"\n\
         \n\
         ssl_ca\n\
         --generic-multipart-boundary\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"certificate.pem\"\n\
         Content-Type: application/octet-stream\n\
         \n\
         foobar\n\
         --generic-multipart-boundary--\n",
    );
}

#[tokio::test]
async fn certificate_list_and_get() {
    let (server, client) = setup().await;

    let cert = json!({
        "uuid": "c986be37-4d55-4b4c-9b6b-bf4c96aa2e6c",
        "certtype": "ssl",
        "signature": "ssl_14617336624230451058",
        "start_date": "2020-01-01T00:00:00+00:00",
        "expiry_date": "2021-01-01T00:00:00+00:00",
        "issuer": null
    });

    Mock::given(method("GET"))
        .and(path("/certificate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "certificates": [cert] })))
        .mount(&server)
        .await;

    let page = client
        .list_certificates(&ListQuery::default())
        .await
        .expect("certificate list");

    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].certtype, "ssl");
    assert_eq!(page.items[0].issuer, None);
}

// ── PTP parameters (S5) ─────────────────────────────────────────────

#[tokio::test]
async fn ptp_parameter_create_sends_exactly_supplied_fields() {
    let (server, client) = setup().await;

    let expected_body = json!({"name": "masterOnly", "value": "0"});

    Mock::given(method("POST"))
        .and(path("/ptp_parameters"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "uuid": PTP_PARAM_UUID,
            "name": "masterOnly",
            "value": "0",
            "owners": ["6cb60b2f-98f7-4ea7-92e9-84b4962cbcc1"]
        })))
        .mount(&server)
        .await;

    let opts = PtpParameterOpts {
        name: Some("masterOnly".into()),
        value: Some("0".into()),
    };
    let param = client
        .create_ptp_parameter(&opts)
        .await
        .expect("ptp parameter create");

    assert_eq!(param.uuid, PTP_PARAM_UUID.parse::<Uuid>().expect("uuid"));
    assert_eq!(param.owners.len(), 1);

    // The request body carried exactly the supplied fields, nothing else.
    let requests = server.received_requests().await.expect("recorded requests");
    assert_json_eq(&requests[0].body, &expected_body);
}

// ── Licences (S6) ───────────────────────────────────────────────────

#[tokio::test]
async fn license_install_then_read_round_trip() {
    let (server, client) = setup().await;

    // 36-character licence payload.
    let payload = "aaa6ba7b-4b99-48d4-bb52-e86d3bd4e337";

    Mock::given(method("POST"))
        .and(path("/license/license_install"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": "", "error": ""})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/license/get_license_file"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"content": payload, "error": ""})),
        )
        .mount(&server)
        .await;

    let installed = client
        .install_license("license.lic", payload.as_bytes())
        .await
        .expect("license install");
    assert!(!installed.is_error());

    let license = client.get_license().await.expect("license read");
    assert_eq!(license.content, payload);

    let requests = server.received_requests().await.expect("recorded requests");
    assert_multipart_eq(
        &requests[0].body,
        &format!(
            "--generic-multipart-boundary\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"license.lic\"\n\
             Content-Type: application/octet-stream\n\
             \n\
             {payload}\n\
             --generic-multipart-boundary--\n"
        ),
    );
}

#[tokio::test]
async fn license_streamed_install_matches_buffered_wire_shape() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/license/license_install"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": "", "error": ""})),
        )
        .mount(&server)
        .await;

    let payload = b"streamed licence payload".to_vec();
    client
        .install_license_from("license.lic", move || std::io::Cursor::new(payload.clone()))
        .await
        .expect("streamed install");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_multipart_eq(
        &requests[0].body,
        "--generic-multipart-boundary\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"license.lic\"\n\
         Content-Type: application/octet-stream\n\
         \n\
         streamed licence payload\n\
         --generic-multipart-boundary--\n",
    );
}

// ── Pagination & queries ────────────────────────────────────────────

#[tokio::test]
async fn empty_page_is_empty_but_failed_fetch_is_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"clusters": []})))
        .mount(&server)
        .await;

    let page = client
        .list_clusters(&ListQuery::default())
        .await
        .expect("cluster list");
    assert!(page.is_empty());

    // A transport failure surfaces as an error, never as an empty page.
    Mock::given(method("GET"))
        .and(path("/ptp"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = client.list_ptp().await.expect_err("expected API error");
    match err {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn list_query_params_are_emitted_in_stable_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ptp_parameters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ptp_parameters": []})))
        .mount(&server)
        .await;

    let query = ListQuery::default()
        .marker("a1")
        .limit(2)
        .sort("name", SortDir::Asc);
    client
        .list_ptp_parameters(&query)
        .await
        .expect("ptp parameter list");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(
        requests[0].url.query(),
        Some("marker=a1&limit=2&sort_key=name&sort_dir=asc")
    );
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn not_found_maps_to_dedicated_error() {
    let (server, client) = setup().await;

    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/clusters/{id}")))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let err = client.get_cluster(&id).await.expect_err("expected 404");
    assert!(err.is_not_found(), "got: {err:?}");
}

#[tokio::test]
async fn decode_failure_preserves_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/idns"))
        .respond_with(ResponseTemplate::new(200).set_body_string("certainly not json"))
        .mount(&server)
        .await;

    let err = client.list_dns().await.expect_err("expected decode error");
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "certainly not json"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Token refresh ───────────────────────────────────────────────────

struct CountingRefresher {
    calls: AtomicUsize,
    token: &'static str,
}

#[async_trait::async_trait]
impl TokenRefresher for CountingRefresher {
    async fn refresh(&self) -> Result<SecretString, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SecretString::from(self.token))
    }
}

#[tokio::test]
async fn refresh_retries_once_with_new_token() {
    let server = MockServer::start().await;

    // The stale token is rejected; the refreshed one succeeds.
    Mock::given(method("GET"))
        .and(path("/idns"))
        .and(header("X-Auth-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/idns"))
        .and(header("X-Auth-Token", "fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"idnss": []})))
        .mount(&server)
        .await;

    let refresher = Arc::new(CountingRefresher {
        calls: AtomicUsize::new(0),
        token: "fresh-token",
    });
    let client = InventoryClient::from_reqwest(
        &server.uri(),
        SecretString::from(TEST_TOKEN),
        reqwest::Client::new(),
    )
    .expect("client")
    .with_token_refresher(refresher.clone());

    let page = client.list_dns().await.expect("list after refresh");
    assert!(page.is_empty());
    assert_eq!(refresher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        server
            .received_requests()
            .await
            .expect("recorded requests")
            .len(),
        2
    );
}

#[tokio::test]
async fn persistent_rejection_fails_after_single_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/idns"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let refresher = Arc::new(CountingRefresher {
        calls: AtomicUsize::new(0),
        token: "still-rejected",
    });
    let client = InventoryClient::from_reqwest(
        &server.uri(),
        SecretString::from(TEST_TOKEN),
        reqwest::Client::new(),
    )
    .expect("client")
    .with_token_refresher(refresher.clone());

    let err = client.list_dns().await.expect_err("expected auth failure");
    assert!(matches!(err, Error::AuthFailed { status: 401 }), "got: {err:?}");

    // Exactly one refresh, exactly two requests — no loop.
    assert_eq!(refresher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        server
            .received_requests()
            .await
            .expect("recorded requests")
            .len(),
        2
    );
}

#[tokio::test]
async fn rejection_without_refresher_fails_immediately() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/idns"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client.list_dns().await.expect_err("expected auth failure");
    assert!(matches!(err, Error::AuthFailed { status: 403 }), "got: {err:?}");
    assert_eq!(
        server
            .received_requests()
            .await
            .expect("recorded requests")
            .len(),
        1
    );
}

// ── Cancellation ────────────────────────────────────────────────────

#[tokio::test]
async fn cancellation_aborts_in_flight_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/idns"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"idnss": []}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let client = InventoryClient::from_reqwest(
        &server.uri(),
        SecretString::from(TEST_TOKEN),
        reqwest::Client::new(),
    )
    .expect("client")
    .with_cancellation(cancel.clone());

    let trip = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
    });

    let err = client.list_dns().await.expect_err("expected cancellation");
    assert!(matches!(err, Error::Cancelled), "got: {err:?}");
    trip.await.expect("cancel task");
}
