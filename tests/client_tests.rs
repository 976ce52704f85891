//! Client tests against a local mock of TheMealDB
//!
//! Every test runs its own mockito server; nothing touches the real API.

use std::io::Cursor;
use std::sync::Arc;

use cookbook::cache::ImageCache;
use cookbook::error::CookbookError;
use cookbook::mealdb::MealDbClient;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use mockito::{Matcher, Server};
use serde_json::json;

/// Client pointed at the mock server with a roomy image cache
fn client_for(server: &Server) -> MealDbClient {
    MealDbClient::with_base_url(format!("{}/", server.url()), ImageCache::new(16 * 1024 * 1024))
        .unwrap()
}

/// Encode a solid-color PNG of the given size
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([200, 40, 40, 255]),
    ));
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON Fetcher Tests
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_categories_decodes_beef() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/categories.php")
        .match_header("user-agent", Matcher::Regex("^cookbook/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"categories":[{"idCategory":"1","strCategory":"Beef","strCategoryThumb":"http://x/b.png","strCategoryDescription":"..."}]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let response = client_for(&server).get_categories().await.unwrap();

    assert_eq!(response.categories.len(), 1);
    assert_eq!(response.categories[0].name, "Beef");
    assert_eq!(response.categories[0].thumbnail, "http://x/b.png");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_meals_sends_category_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("c".to_string(), "Seafood".to_string()))
        .with_status(200)
        .with_body(r#"{"meals":[{"strMeal":"Fish Pie","strMealThumb":"http://x/f.png","idMeal":"52"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let response = client_for(&server).get_meals("Seafood").await.unwrap();

    assert_eq!(response.meals.len(), 1);
    assert_eq!(response.meals[0].id, "52");
    assert_eq!(response.meals[0].name, "Fish Pie");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_meals_encodes_category_with_spaces() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("c".to_string(), "Side Dish".to_string()))
        .with_status(200)
        .with_body(r#"{"meals":[]}"#)
        .create_async()
        .await;

    let response = client_for(&server).get_meals("Side Dish").await.unwrap();

    assert!(response.meals.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_meal_list_is_invalid_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals":null}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals":null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let meals = client.get_meals("Nope").await.unwrap_err();
    assert!(matches!(meals, CookbookError::InvalidData(_)));

    let details = client.get_meal_details("0").await.unwrap_err();
    assert!(matches!(details, CookbookError::InvalidData(_)));
}

#[tokio::test]
async fn test_get_meal_details_decodes_field_for_field() {
    let detail = json!({
        "idMeal": "52772",
        "strMeal": "Teriyaki Chicken Casserole",
        "strCategory": "Chicken",
        "strArea": "Japanese",
        "strInstructions": "Preheat oven to 350 F.",
        "strMealThumb": "http://x/t.jpg",
        "strTags": "Meat,Casserole",
        "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
        "strIngredient1": "soy sauce",
        "strIngredient2": "water",
        "strIngredient3": "",
        "strMeasure1": "3/4 cup",
        "strMeasure2": "1/2 cup",
        "strMeasure3": "",
        "strSource": null,
        "dateModified": null
    });
    let body = json!({ "meals": [detail] });

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".to_string(), "52772".to_string()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let response = client_for(&server).get_meal_details("52772").await.unwrap();

    assert_eq!(serde_json::to_value(&response).unwrap(), body);
    let meal = &response.meals[0];
    assert_eq!(meal.ingredients().len(), 2);
    assert_eq!(meal.tag_list(), vec!["Meat", "Casserole"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_200_is_invalid_response() {
    for status in [201, 301, 404, 500] {
        let mut server = Server::new_async().await;
        // Body is valid JSON so a decode attempt would have succeeded
        server
            .mock("GET", "/categories.php")
            .with_status(status)
            .with_body(r#"{"categories":[]}"#)
            .create_async()
            .await;

        let err = client_for(&server).get_categories().await.unwrap_err();
        assert!(
            matches!(err, CookbookError::InvalidResponse { status: s } if s == status as u16),
            "status {status} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn test_malformed_json_is_invalid_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals":[{"strMeal":"Fish Pie","strMealThumb":"http://x/f.png","idMeal":"52")}]}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_meals("Seafood").await.unwrap_err();
    assert!(matches!(err, CookbookError::InvalidData(_)));
}

#[tokio::test]
async fn test_schema_mismatch_is_invalid_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_body(r#"{"categories":[{"strCategory":"Beef"}]}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_categories().await.unwrap_err();
    assert!(matches!(err, CookbookError::InvalidData(_)));
}

#[tokio::test]
async fn test_empty_body_is_invalid_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let err = client_for(&server).get_categories().await.unwrap_err();
    assert!(matches!(err, CookbookError::InvalidData(ref m) if m.contains("empty")));
}

#[tokio::test]
async fn test_connection_refused_is_unable_to_complete() {
    let client =
        MealDbClient::with_base_url("http://127.0.0.1:1/", ImageCache::new(1024)).unwrap();

    let err = client.get_categories().await.unwrap_err();
    assert!(matches!(err, CookbookError::UnableToComplete(_)));
}

#[tokio::test]
async fn test_malformed_base_url_is_invalid_url() {
    let client = MealDbClient::with_base_url("::not a url::", ImageCache::new(1024)).unwrap();

    let err = client.get_meal_details("1").await.unwrap_err();
    assert!(matches!(err, CookbookError::InvalidUrl(_)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Image Fetcher Tests
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_second_image_fetch_is_served_from_cache() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/img/beef.png")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(png_bytes(3, 2))
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let url = format!("{}/img/beef.png", server.url());

    let first = client.download_image(&url).await.unwrap();
    let second = client.download_image(&url).await.unwrap();

    assert_eq!((first.width(), first.height()), (3, 2));
    assert!(Arc::ptr_eq(&first, &second));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_format_is_sniffed_not_declared() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/img/mislabeled")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(png_bytes(1, 1))
        .create_async()
        .await;

    let client = client_for(&server);
    let image = client
        .download_image(&format!("{}/img/mislabeled", server.url()))
        .await;

    assert!(image.is_some());
}

#[tokio::test]
async fn test_image_404_yields_none_and_leaves_cache_untouched() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/img/missing.png")
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(&server);
    let url = format!("{}/img/missing.png", server.url());

    assert!(client.download_image(&url).await.is_none());
    assert!(!client.images().contains(&url));
    assert_eq!(client.images().status().await.entries, 0);
}

#[tokio::test]
async fn test_undecodable_image_yields_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/img/garbage.png")
        .with_status(200)
        .with_body("definitely not an image")
        .create_async()
        .await;

    let client = client_for(&server);
    let url = format!("{}/img/garbage.png", server.url());

    assert!(client.download_image(&url).await.is_none());
    assert!(!client.images().contains(&url));
}

#[tokio::test]
async fn test_empty_image_body_yields_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/img/empty.png")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client
        .download_image(&format!("{}/img/empty.png", server.url()))
        .await
        .is_none());
}

#[tokio::test]
async fn test_malformed_image_url_yields_none() {
    let client =
        MealDbClient::with_base_url("http://127.0.0.1:1/", ImageCache::new(1024)).unwrap();

    assert!(client.download_image("not a url").await.is_none());
    assert!(!client.images().contains("not a url"));
}

#[tokio::test]
async fn test_cached_image_needs_no_network() {
    let client =
        MealDbClient::with_base_url("http://127.0.0.1:1/", ImageCache::new(1024 * 1024)).unwrap();
    let url = "http://127.0.0.1:1/never-served.png";
    let image = Arc::new(DynamicImage::ImageRgba8(RgbaImage::new(2, 2)));
    client.images().insert(url, Arc::clone(&image)).await;

    let fetched = client.download_image(url).await.unwrap();
    assert!(Arc::ptr_eq(&fetched, &image));
}

#[tokio::test]
async fn test_concurrent_fetches_of_different_urls_stay_separate() {
    let mut server = Server::new_async().await;
    let small = server
        .mock("GET", "/img/small.png")
        .with_status(200)
        .with_body(png_bytes(1, 1))
        .expect(1)
        .create_async()
        .await;
    let large = server
        .mock("GET", "/img/large.png")
        .with_status(200)
        .with_body(png_bytes(8, 4))
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let small_url = format!("{}/img/small.png", server.url());
    let large_url = format!("{}/img/large.png", server.url());

    let (a, b) = tokio::join!(
        client.download_image(&small_url),
        client.download_image(&large_url)
    );
    assert_eq!(a.unwrap().width(), 1);
    assert_eq!(b.unwrap().width(), 8);

    let cached_small = client.images().get(&small_url).await.unwrap();
    let cached_large = client.images().get(&large_url).await.unwrap();
    assert_eq!((cached_small.width(), cached_small.height()), (1, 1));
    assert_eq!((cached_large.width(), cached_large.height()), (8, 4));

    small.assert_async().await;
    large.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_fetches_of_same_url_are_not_deduplicated() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/img/dup.png")
        .with_status(200)
        .with_body(png_bytes(2, 2))
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let url = format!("{}/img/dup.png", server.url());

    let (a, b) = tokio::join!(client.download_image(&url), client.download_image(&url));
    assert!(a.is_some());
    assert!(b.is_some());
    assert!(client.images().contains(&url));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_clones_share_one_cache() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/img/shared.png")
        .with_status(200)
        .with_body(png_bytes(1, 1))
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let clone = client.clone();
    let url = format!("{}/img/shared.png", server.url());

    assert!(client.download_image(&url).await.is_some());
    assert!(clone.download_image(&url).await.is_some());
    mock.assert_async().await;
}

// ─────────────────────────────────────────────────────────────────────────────
// Completion Callback Tests
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_categories_then_delivers_once() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_body(r#"{"categories":[]}"#)
        .create_async()
        .await;

    let (tx, rx) = tokio::sync::oneshot::channel();
    client_for(&server)
        .get_categories_then(move |result| {
            let _ = tx.send(result);
        })
        .await
        .unwrap();

    let result = rx.await.unwrap();
    assert!(result.unwrap().categories.is_empty());
}

#[tokio::test]
async fn test_get_meals_then_delivers_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let (tx, rx) = tokio::sync::oneshot::channel();
    client_for(&server)
        .get_meals_then("Seafood", move |result| {
            let _ = tx.send(result);
        })
        .await
        .unwrap();

    let err = rx.await.unwrap().unwrap_err();
    assert!(matches!(err, CookbookError::InvalidResponse { status: 503 }));
}

#[tokio::test]
async fn test_get_meal_details_then_delivers_meal() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".to_string(), "52".to_string()))
        .with_status(200)
        .with_body(r#"{"meals":[{"idMeal":"52","strMeal":"Fish Pie"}]}"#)
        .create_async()
        .await;

    let (tx, rx) = tokio::sync::oneshot::channel();
    client_for(&server)
        .get_meal_details_then("52", move |result| {
            let _ = tx.send(result);
        })
        .await
        .unwrap();

    let response = rx.await.unwrap().unwrap();
    assert_eq!(response.meals[0].name, "Fish Pie");
}

#[tokio::test]
async fn test_download_image_then_populates_cache() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/img/cb.png")
        .with_status(200)
        .with_body(png_bytes(5, 5))
        .create_async()
        .await;

    let client = client_for(&server);
    let url = format!("{}/img/cb.png", server.url());

    let (tx, rx) = tokio::sync::oneshot::channel();
    client
        .download_image_then(&url, move |image| {
            let _ = tx.send(image.map(|i| i.width()));
        })
        .await
        .unwrap();

    assert_eq!(rx.await.unwrap(), Some(5));
    assert!(client.images().contains(&url));
}
