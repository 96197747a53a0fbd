use crate::run_server_with_incoming;
use car_factory_core::{
    identifier::parse_identifier,
    proto::{ListCarRequest, factory_client::FactoryClient},
    types::audi_a3_request,
};
use std::net::SocketAddr;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{codec::CompressionEncoding, transport::Channel};
use tonic_health::pb::{
    HealthCheckRequest, health_check_response::ServingStatus, health_client::HealthClient,
};
use tonic_reflection::pb::v1::{
    ServerReflectionRequest, server_reflection_client::ServerReflectionClient,
    server_reflection_request::MessageRequest, server_reflection_response::MessageResponse,
};

struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(run_server_with_incoming(
            TcpListenerStream::new(listener),
            async move {
                let _ = rx.await;
            },
        ));

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    async fn channel(&self) -> Channel {
        Channel::from_shared(format!("http://{}", self.addr))
            .unwrap()
            .connect()
            .await
            .unwrap()
    }

    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn build_over_the_wire() {
    let server = TestServer::start().await;
    let mut client = FactoryClient::new(server.channel().await);

    let first = client.build(audi_a3_request()).await.unwrap().into_inner();
    let second = client.build(audi_a3_request()).await.unwrap().into_inner();

    assert!(parse_identifier(&first.identifier).is_some());
    assert!(parse_identifier(&second.identifier).is_some());
    assert_ne!(first.identifier, second.identifier);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn list_over_the_wire() {
    let server = TestServer::start().await;
    let mut client = FactoryClient::new(server.channel().await);

    let first = client.list(ListCarRequest {}).await.unwrap().into_inner();
    let second = client.list(ListCarRequest {}).await.unwrap().into_inner();

    assert_eq!(first.cars.len(), 2);
    assert_eq!(first.cars[0].name, "Batmobile");
    assert_eq!(first.cars[1].name, "K2000");
    assert_ne!(first.cars[0].identifier, first.cars[1].identifier);
    assert_ne!(first.cars[0].identifier, second.cars[0].identifier);
    assert_ne!(first.cars[1].identifier, second.cars[1].identifier);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn compressed_calls_are_accepted() {
    let server = TestServer::start().await;
    let mut client = FactoryClient::new(server.channel().await)
        .send_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Zstd);

    let resp = client.build(audi_a3_request()).await.unwrap().into_inner();
    assert!(parse_identifier(&resp.identifier).is_some());

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn concurrent_builds_yield_distinct_identifiers() {
    let server = TestServer::start().await;
    let channel = server.channel().await;

    let tasks: Vec<_> = (0..32)
        .map(|_| {
            let mut client = FactoryClient::new(channel.clone());
            tokio::spawn(async move {
                client
                    .build(audi_a3_request())
                    .await
                    .unwrap()
                    .into_inner()
                    .identifier
            })
        })
        .collect();

    let mut ids = std::collections::HashSet::new();
    for task in tasks {
        assert!(ids.insert(task.await.unwrap()));
    }

    drop(channel);
    server.stop().await;
}

#[tokio::test]
async fn health_reports_factory_serving() {
    let server = TestServer::start().await;
    let mut health = HealthClient::new(server.channel().await);

    let resp = health
        .check(HealthCheckRequest {
            service: "car.Factory".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(resp.status(), ServingStatus::Serving);

    drop(health);
    server.stop().await;
}

#[tokio::test]
async fn shutdown_marks_factory_not_serving() {
    let server = TestServer::start().await;
    let mut health = HealthClient::new(server.channel().await);

    let mut updates = health
        .watch(HealthCheckRequest {
            service: "car.Factory".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    let current = updates.message().await.unwrap().unwrap();
    assert_eq!(current.status(), ServingStatus::Serving);

    let TestServer {
        shutdown, handle, ..
    } = server;
    shutdown.send(()).unwrap();

    let update = updates.message().await.unwrap().unwrap();
    assert_eq!(update.status(), ServingStatus::NotServing);

    // the watch stream is in flight until dropped, which would stall draining
    drop(updates);
    drop(health);
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn reflection_lists_factory() {
    let server = TestServer::start().await;
    let mut reflection = ServerReflectionClient::new(server.channel().await);

    let request = ServerReflectionRequest {
        host: String::new(),
        message_request: Some(MessageRequest::ListServices(String::new())),
    };
    let mut responses = reflection
        .server_reflection_info(tokio_stream::iter([request]))
        .await
        .unwrap()
        .into_inner();
    let resp = responses.message().await.unwrap().unwrap();

    let services: Vec<String> = match resp.message_response {
        Some(MessageResponse::ListServicesResponse(list)) => {
            list.service.into_iter().map(|s| s.name).collect()
        }
        other => panic!("unexpected reflection response: {other:?}"),
    };
    assert!(
        services.iter().any(|name| name == "car.Factory"),
        "services: {services:?}"
    );

    drop(responses);
    drop(reflection);
    server.stop().await;
}
