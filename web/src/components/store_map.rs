use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{geographic_center, LatLng, Store};
use thaw::{Label, LabelSize};

use crate::components::store_card::{score_color, score_label};
use crate::routes::AppRoute;

/// Geographic centre of the contiguous United States.
const DEFAULT_CENTER: LatLng = LatLng {
    latitude: 39.8283,
    longitude: -98.5795,
};

/// Centres on the stores, then on the searched location, then on the US.
pub fn map_center(stores: &[Store], user_location: Option<LatLng>) -> LatLng {
    let positions: Vec<LatLng> = stores.iter().map(Store::position).collect();
    geographic_center(&positions)
        .or(user_location)
        .unwrap_or(DEFAULT_CENTER)
}

fn marker_icon(store: &Store) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='28' height='42' viewBox='0 0 28 42'%3E%3Cpath fill='{}' stroke='%23ffffff' stroke-width='1.5' d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/%3E%3C/svg%3E",
        score_color(store)
    )
}

#[component]
fn StoreMarker(store: Store) -> impl IntoView {
    let href = AppRoute::store(store.id.clone()).href();
    let name = store.name.clone();
    let address = store.address.clone();
    let score_text = score_label(&store);
    let icon_url = marker_icon(&store);

    view! {
        <Marker
            position=Position::new(store.latitude, store.longitude)
            draggable=false
            icon_url=Some(icon_url)
            icon_size=Some((28.0, 42.0))
            icon_anchor=Some((14.0, 42.0))
        >
            <Popup>
                <div style="margin: 0.5rem 0; display: flex; flex-direction: column; gap: 0.5rem;">
                    <Label size=LabelSize::Large>{name}</Label>
                    <p style="margin: 0; color: #6b7280; font-size: 0.875rem;">
                        {address}
                    </p>
                    <p style="margin: 0; font-weight: 600;">{score_text}</p>
                    <a href=href
                       style="background: #0f766e; color: white; padding: 0.5rem 1rem; border-radius: 6px; text-decoration: none; text-align: center; font-weight: 600;">
                        "Check in here"
                    </a>
                </div>
            </Popup>
        </Marker>
    }
}

#[component]
pub fn StoreMap(stores: Vec<Store>, user_location: Option<LatLng>) -> impl IntoView {
    let center = map_center(&stores, user_location);

    view! {
        <div class="store-map">
            <MapContainer
                style="height: 420px; width: 100%"
                center=Position::new(center.latitude, center.longitude)
                zoom=13.0
                set_view=true
            >
                <TileLayer
                    url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                    attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                />
                {stores
                    .into_iter()
                    .map(|store| view! { <StoreMarker store=store /> })
                    .collect_view()}
            </MapContainer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(latitude: f64, longitude: f64) -> Store {
        Store {
            id: "s".to_string(),
            name: "Market".to_string(),
            address: "1 Main St".to_string(),
            open: None,
            latitude,
            longitude,
            score: 8.0,
            busy: 0.0,
            line: 0.0,
            hygiene: 0.0,
            masks: 0.0,
            check_in_count: 2,
        }
    }

    #[test]
    fn centers_on_stores_first() {
        let user = LatLng {
            latitude: 0.0,
            longitude: 0.0,
        };
        let center = map_center(&[store_at(47.6, -122.3)], Some(user));
        assert!((center.latitude - 47.6).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_user_location_then_default() {
        let user = LatLng {
            latitude: 40.0,
            longitude: -77.0,
        };
        assert_eq!(map_center(&[], Some(user)), user);
        assert_eq!(map_center(&[], None), DEFAULT_CENTER);
    }

    #[test]
    fn marker_icon_embeds_score_color() {
        assert!(marker_icon(&store_at(0.0, 0.0)).contains("fill='%2316a34a'"));
    }
}
