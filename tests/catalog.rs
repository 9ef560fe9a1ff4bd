use food_storefront_api::{
    config::AppConfig,
    error::AppError,
    routes::params::{MenuQuery, RestaurantQuery},
    services::catalog_service,
    state::AppState,
};

fn test_state() -> AppState {
    AppState::new(AppConfig::default())
}

fn query(q: Option<&str>, cuisine: Option<&str>) -> RestaurantQuery {
    RestaurantQuery {
        q: q.map(str::to_string),
        cuisine: cuisine.map(str::to_string),
        ..Default::default()
    }
}

#[tokio::test]
async fn search_combines_name_and_cuisine() -> anyhow::Result<()> {
    let state = test_state();

    let resp = catalog_service::list_restaurants(&state, query(Some("pasta"), Some("Italian"))).await?;
    let names: Vec<String> = resp.data.unwrap().items.into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Pasta Paradise".to_string()]);

    // cuisine is matched without regard to case
    let resp = catalog_service::list_restaurants(&state, query(None, Some("italian"))).await?;
    let names: Vec<String> = resp.data.unwrap().items.into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Pasta Paradise".to_string(), "Pizza Place".to_string()]);

    let resp = catalog_service::list_restaurants(&state, query(Some("BURGER"), Some("All"))).await?;
    assert_eq!(resp.data.unwrap().items.len(), 1);

    let resp = catalog_service::list_restaurants(&state, query(Some("zzz"), None)).await?;
    assert!(resp.data.unwrap().items.is_empty());
    assert_eq!(resp.meta.unwrap().total, Some(0));

    Ok(())
}

#[tokio::test]
async fn listing_is_paginated() -> anyhow::Result<()> {
    let state = test_state();

    let resp = catalog_service::list_restaurants(&state, RestaurantQuery::default()).await?;
    assert_eq!(resp.data.unwrap().items.len(), 8);

    let resp = catalog_service::list_restaurants(
        &state,
        RestaurantQuery {
            page: Some(3),
            per_page: Some(3),
            ..Default::default()
        },
    )
    .await?;
    let meta = resp.meta.unwrap();
    assert_eq!(meta.page, Some(3));
    assert_eq!(meta.per_page, Some(3));
    assert_eq!(meta.total, Some(8));
    let ids: Vec<i64> = resp.data.unwrap().items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 8]);

    Ok(())
}

#[tokio::test]
async fn featured_and_cuisine_options() -> anyhow::Result<()> {
    let state = test_state();

    let featured = catalog_service::featured_restaurants(&state).await?.data.unwrap();
    assert_eq!(featured.items.len(), 4);

    let cuisines = catalog_service::cuisines(&state).await?.data.unwrap().items;
    assert_eq!(cuisines.first().map(String::as_str), Some("All"));
    assert_eq!(cuisines.iter().filter(|c| *c == "Italian").count(), 1);
    assert_eq!(cuisines.len(), 8);

    Ok(())
}

#[tokio::test]
async fn restaurant_detail_and_menu_tabs() -> anyhow::Result<()> {
    let state = test_state();

    let restaurant = catalog_service::get_restaurant(&state, 1).await?.data.unwrap();
    assert_eq!(restaurant.name, "Burger Haven");
    assert_eq!(restaurant.menu.len(), 6);

    let section = catalog_service::menu_section(&state, 1, MenuQuery::default())
        .await?
        .data
        .unwrap();
    assert_eq!(section.category, "Burgers");
    assert_eq!(section.items.len(), 3);

    let section = catalog_service::menu_section(
        &state,
        1,
        MenuQuery {
            category: Some("Drinks".into()),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(section.items.len(), 1);
    assert_eq!(section.items[0].name, "Soft Drink");

    let err = catalog_service::get_restaurant(&state, 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}

#[tokio::test]
async fn far_out_pages_are_empty() -> anyhow::Result<()> {
    let state = test_state();

    let resp = catalog_service::list_restaurants(
        &state,
        RestaurantQuery {
            page: Some(i64::MAX),
            per_page: Some(100),
            ..Default::default()
        },
    )
    .await?;
    let meta = resp.meta.unwrap();
    assert_eq!(meta.page, Some(i64::MAX));
    assert_eq!(meta.total, Some(8));
    assert!(resp.data.unwrap().items.is_empty());

    Ok(())
}
