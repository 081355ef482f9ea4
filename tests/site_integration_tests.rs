// Site Integration Tests
//
// Drive the full router (pages, fragments, JSON, static files) with oneshot
// requests against the bundled catalog.
// Run with: cargo test --test site_integration_tests

#[cfg(feature = "server")]
mod site_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rehlatours_site::catalog::REVIEWS;
    use rehlatours_site::landing::{search_faqs, CERTIFICATIONS, FAQS, HERO, TESTIMONIALS};
    use rehlatours_site::{create_router, AppState, Catalog, SiteConfig};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app with default settings
    fn create_test_app() -> axum::Router {
        let state = AppState::new(SiteConfig::default()).expect("bundled catalog is valid");
        create_router(state)
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Pages
    // =========================================================================

    #[tokio::test]
    async fn test_home_page_sections() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<title>Rehlatours.id - Umroh Ditangan Anda</title>"));
        assert!(html.contains("Paket Umroh Pilihan"));
        assert!(html.contains("Pertanyaan yang Sering Diajukan"));
        assert!(html.contains(r#"hx-trigger="every 5s""#));
        assert!(html.contains("Berlangganan"));
    }

    #[tokio::test]
    async fn test_packages_page_lists_full_catalog() {
        let html = body_text(get("/packages").await).await;
        assert!(html.contains("Menampilkan 5 dari 5 paket"));
        for id in ["ekonomi-9-hari", "reguler-12-hari", "premium-14-hari", "premium-14-hari-turki", "vip-16-hari"] {
            assert!(html.contains(&format!("package-{}\"", id)), "missing card {}", id);
        }
    }

    #[tokio::test]
    async fn test_packages_page_vip_filter() {
        let html = body_text(get("/packages?category=vip").await).await;
        assert!(html.contains("Menampilkan 1 dari 5 paket"));
        assert!(html.contains("package-vip-16-hari\""));
        assert!(!html.contains("package-ekonomi-9-hari\""));
    }

    #[tokio::test]
    async fn test_packages_filter_form_keeps_category() {
        let html = body_text(get("/packages?category=vip").await).await;
        assert!(html.contains(r#"<input type="hidden" name="category" value="vip">"#));

        // What the browser sends after a sort change on the VIP view
        let resorted = body_text(
            get("/packages?q=&category=vip&sort=price-low&min_price=0&max_price=50000000&view=grid")
                .await,
        )
        .await;
        assert!(resorted.contains("Menampilkan 1 dari 5 paket"));
        assert!(resorted.contains("package-vip-16-hari\""));

        let unfiltered = body_text(get("/packages").await).await;
        assert!(!unfiltered.contains(r#"name="category""#));
    }

    #[tokio::test]
    async fn test_packages_page_empty_state() {
        let html = body_text(get("/packages?q=kapal%20pesiar").await).await;
        assert!(html.contains("Menampilkan 0 dari 5 paket"));
        assert!(html.contains("Tidak ada paket yang sesuai"));
        assert!(html.contains("Reset Filter"));
    }

    #[tokio::test]
    async fn test_packages_htmx_request_returns_results_only() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/packages?q=turki")
                    .header("HX-Request", "true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.starts_with("<div id=\"package-results\">"));
        assert!(!html.contains("<html"));
        assert!(html.contains("Menampilkan 1 dari 5 paket"));
        assert!(html.contains("package-premium-14-hari-turki\""));
    }

    #[tokio::test]
    async fn test_package_detail_page() {
        let response = get("/packages/reguler-12-hari").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Umrah Plus Mesir"));
        assert!(html.contains("Hemat 8%"));
        assert!(html.contains("Umrah%20Plus%20Mesir"));
        assert!(html.contains("Deskripsi Paket"));
        assert!(html.contains("Paket Lainnya"));
        assert!(html.contains("Kembali ke Daftar Paket"));
    }

    #[tokio::test]
    async fn test_package_detail_accommodation_tab() {
        let html = body_text(get("/packages/vip-16-hari?tab=accommodation").await).await;
        assert!(html.contains("First class flight"));
        assert!(html.contains("Luxury private car"));
        assert!(!html.contains("Deskripsi Paket"));
    }

    #[tokio::test]
    async fn test_package_detail_itinerary_expands() {
        let collapsed = body_text(get("/packages/ekonomi-9-hari?tab=itinerary").await).await;
        assert!(collapsed.contains("Hari Lainnya"));

        let expanded =
            body_text(get("/packages/ekonomi-9-hari?tab=itinerary&all_itinerary=true").await).await;
        assert!(expanded.contains("Tampilkan Lebih Sedikit"));
    }

    #[tokio::test]
    async fn test_unknown_package_renders_not_found() {
        let response = get("/packages/nonexistent-id").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert!(html.contains("<title>Package Tidak Ditemukan - Rehlatours.id</title>"));
        assert!(html.contains("Kembali ke Daftar Paket"));
    }

    #[tokio::test]
    async fn test_unknown_package_with_flags_renders_not_found() {
        let response = get("/packages/nonexistent-id?all_features=1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response)
            .await
            .contains("<title>Package Tidak Ditemukan - Rehlatours.id</title>"));
    }

    #[tokio::test]
    async fn test_package_detail_accepts_loose_flags() {
        let response = get("/packages/ekonomi-9-hari?tab=itinerary&all_itinerary=yes").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Tampilkan Lebih Sedikit"));
    }

    #[tokio::test]
    async fn test_package_detail_favorite_toggle() {
        let html = body_text(get("/packages/vip-16-hari?tab=reviews").await).await;
        assert!(html.contains(r#"id="favorite-toggle""#));
        assert!(html.contains(r#"aria-pressed="false""#));
        assert!(html.contains("tab=reviews&amp;favorite=true"));

        let liked = body_text(get("/packages/vip-16-hari?favorite=true").await).await;
        assert!(liked.contains(r#"aria-pressed="true""#));
        assert!(liked.contains("Hapus dari favorit"));
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found() {
        let response = get("/tidak-ada").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Halaman Tidak Ditemukan"));
    }

    // =========================================================================
    // Section 3: HTMX Fragments
    // =========================================================================

    #[tokio::test]
    async fn test_testimonial_fragment_wraps_index() {
        let response = get(&format!("/fragments/testimonials?index={}", TESTIMONIALS.len() + 1)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(TESTIMONIALS[1].name));
        assert!(html.contains("/fragments/testimonials?index=2"));
        assert!(!html.contains("<html"));
    }

    #[tokio::test]
    async fn test_faq_fragment_filters() {
        let html = body_text(get("/fragments/faq?q=visa").await).await;
        let expected = search_faqs(FAQS, "visa").len();
        assert!(expected > 0);
        assert_eq!(html.matches("<details").count(), expected);

        let none = body_text(get("/fragments/faq?q=kapal%20pesiar").await).await;
        assert!(none.contains("Tidak ada pertanyaan yang cocok"));
    }

    // =========================================================================
    // Section 4: JSON API
    // =========================================================================

    #[tokio::test]
    async fn test_api_packages_filter_and_sort() {
        let body = json_response(get("/api/packages?category=vip").await).await;
        assert_eq!(body["rows"], 1);
        assert_eq!(body["total"], 5);
        assert_eq!(body["data"][0]["id"], "vip-16-hari");
        assert_eq!(body["data"][0]["type"], "vip");

        let sorted = json_response(get("/api/packages?sort=price-low").await).await;
        let data = sorted["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);
        assert_eq!(data[0]["id"], "reguler-12-hari");
        assert_eq!(data[4]["id"], "vip-16-hari");
    }

    #[tokio::test]
    async fn test_api_package_ids() {
        let body = json_response(get("/api/packages/ids").await).await;
        assert_eq!(body["rows"], 5);
        assert_eq!(body["data"][0], "ekonomi-9-hari");
    }

    #[tokio::test]
    async fn test_api_package_by_id() {
        let response = get("/api/packages/reguler-12-hari").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["name"], "Umrah Plus Mesir");
        assert_eq!(body["price"]["discounted"], 23_500_000);
        assert_eq!(body["popularityRank"], 1);

        let missing = get("/api/packages/nonexistent-id").await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        let error = json_response(missing).await;
        assert!(error["error"].as_str().unwrap().contains("nonexistent-id"));
    }

    // =========================================================================
    // Section 5: Static Files
    // =========================================================================

    #[tokio::test]
    async fn test_static_files_served() {
        let response = get("/static/robots.txt").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("User-agent"));

        let missing = get("/static/missing.png").await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bundled_asset_references_resolve() {
        let mut paths: Vec<&str> = vec![HERO.background_image, "/static/favicon.svg"];
        paths.extend(Catalog::bundled().all().iter().map(|p| p.image));
        paths.extend(TESTIMONIALS.iter().map(|t| t.avatar));
        paths.extend(REVIEWS.iter().map(|r| r.avatar));
        paths.extend(CERTIFICATIONS.iter().map(|c| c.logo));

        for path in paths.into_iter().filter(|p| p.starts_with("/static/")) {
            let response = get(path).await;
            assert_eq!(response.status(), StatusCode::OK, "missing asset {}", path);
        }
    }
}
