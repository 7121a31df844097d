//! Integration tests for the HTML site and the health check
//!
//! Runs the full application router so the middleware stack is exercised too.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::util::ServiceExt;

use fyyur::handlers;
use fyyur::test_utils::*;

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_app_state().await;
    let app = handlers::router(state);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("connected"));
}

#[tokio::test]
async fn test_home_and_listing_pages() {
    let state = setup_test_app_state().await;
    seed_sample_directory(&state.db).await;
    let app = handlers::router(state);

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("New York, NY"));
    assert!(page.contains("The Dueling Pianos Bar"));

    let response = app.clone().oneshot(get("/artists")).await.unwrap();
    let page = body_text(response).await;
    assert!(page.contains("Matt Quevedo"));

    let response = app.oneshot(get("/shows")).await.unwrap();
    let page = body_text(response).await;
    assert!(page.contains("The Wild Sax Band"));
}

#[tokio::test]
async fn test_venue_detail_page() {
    let state = setup_test_app_state().await;
    let sample = seed_sample_directory(&state.db).await;
    let app = handlers::router(state);

    let response = app
        .clone()
        .oneshot(get(&format!("/venues/{}", sample.park_square)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("3 Upcoming Shows"));
    assert!(page.contains("1 Past Show"));

    let response = app.oneshot(get("/venues/4242")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn test_search_venues_form() {
    let state = setup_test_app_state().await;
    seed_sample_directory(&state.db).await;
    let app = handlers::router(state);

    let response = app
        .oneshot(form_request("POST", "/venues/search", "search_term=Hop"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Number of search results for &quot;Hop&quot;: 1"));
    assert!(page.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_create_venue_submission() {
    let state = setup_test_app_state().await;
    let app = handlers::router(state.clone());

    let body = "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
                &phone=123-123-1234&genres=Jazz&genres=Reggae&seeking_talent=y\
                &seeking_description=&image_link=&facebook_link=&website_link=";
    let response = app
        .oneshot(form_request("POST", "/venues/create", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Venue The Musical Hop was successfully listed!"));

    let areas = state
        .venues()
        .list_grouped(fyyur::services::schedule::now())
        .await
        .unwrap();
    let id = areas[0].venues[0].id;
    let record = state.venues().find(id).await.unwrap();
    assert_eq!(record.get_genres(), vec!["Jazz", "Reggae"]);
    assert!(record.venue.seeking_talent);
    assert_eq!(record.venue.website_link, None);
}

#[tokio::test]
async fn test_failed_venue_submission_renders_error_page() {
    let state = setup_test_app_state().await;
    let app = handlers::router(state);

    let response = app
        .oneshot(form_request("POST", "/venues/create", "name=Broken&city=&state=CA"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = body_text(response).await;
    assert!(page.contains("An error occurred. Venue Broken could not be listed."));
}

#[tokio::test]
async fn test_edit_venue_redirects_to_detail() {
    let state = setup_test_app_state().await;
    let sample = seed_sample_directory(&state.db).await;
    let app = handlers::router(state.clone());

    let response = app
        .clone()
        .oneshot(get(&format!("/venues/{}/edit", sample.musical_hop)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("value=\"The Musical Hop\""));

    let body = "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
                &genres=Jazz&genres=Blues";
    let response = app
        .oneshot(form_request(
            "POST",
            &format!("/venues/{}/edit", sample.musical_hop),
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/venues/{}", sample.musical_hop).as_str()
    );

    let record = state.venues().find(sample.musical_hop).await.unwrap();
    assert_eq!(record.get_genres(), vec!["Blues", "Jazz"]);
}

#[tokio::test]
async fn test_delete_venue_renders_home_with_flash() {
    let state = setup_test_app_state().await;
    let sample = seed_sample_directory(&state.db).await;
    let app = handlers::router(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", sample.park_square))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Venue Park Square Live Music &amp; Coffee was successfully deleted."));

    let response = app
        .oneshot(get(&format!("/venues/{}", sample.park_square)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_artist_submission() {
    let state = setup_test_app_state().await;
    let app = handlers::router(state.clone());

    let body = "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll&seeking_venue=True";
    let response = app
        .oneshot(form_request("POST", "/artists/create", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Artist Guns N Petals was successfully listed!"));

    let artists = state.artists().list().await.unwrap();
    assert_eq!(artists.len(), 1);
    let record = state.artists().find(artists[0].id).await.unwrap();
    assert!(record.artist.seeking_venue);
}

#[tokio::test]
async fn test_create_show_submission() {
    let state = setup_test_app_state().await;
    let sample = seed_sample_directory(&state.db).await;
    let app = handlers::router(state.clone());

    let body = format!(
        "artist_id={}&venue_id={}&start_time=2035-04-01T20%3A00",
        sample.matt_quevedo, sample.dueling_pianos
    );
    let response = app
        .clone()
        .oneshot(form_request("POST", "/shows/create", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Show was successfully listed!"));

    // Booking the same slot again fails with the error flash
    let response = app
        .clone()
        .oneshot(form_request("POST", "/shows/create", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response)
        .await
        .contains("An error occurred. Show could not be listed."));

    let response = app
        .oneshot(form_request("POST", "/shows/create", "artist_id=abc&venue_id=1&start_time=2035-04-01+20:00"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(state.shows().list().await.unwrap().len(), 6);
}
