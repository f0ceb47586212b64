use super::*;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}")
}

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = serve(base_routes()).await;
    let response = no_redirect_client()
        .get(format!("{base}/healthz"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_to_dashboard() {
    let base = serve(base_routes()).await;
    let response = no_redirect_client().get(format!("{base}/")).send().await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok());
    assert_eq!(location, Some("/dashboard"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = serve(base_routes()).await;
    let response = no_redirect_client()
        .get(format!("{base}/api/links"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
