// crates.io
use httpmock::prelude::*;
// self
use applemaps_server::{
	Category, EtaResponse, Location, MapsClient, RequestOption,
	SearchAutocompleteResponse, SearchResponse, TransportType, http::ReqwestHttpClient,
	url::Url,
};

const CREDENTIAL: &str = "signing.credential";
const TOKEN_BODY: &str = "{\"accessToken\":\"thisis.thejwt.token\",\"expiresInSeconds\":1800}";
const BEARER: &str = "Bearer thisis.thejwt.token";
const DIRECTIONS: &str = include_str!("fixtures/directions.json");
const ETAS: &str = include_str!("fixtures/etas.json");
const GEOCODE: &str = include_str!("fixtures/geocode.json");
const REVERSE_GEOCODE: &str = include_str!("fixtures/reverse_geocode.json");
const SEARCH: &str = include_str!("fixtures/search.json");
const SEARCH_AUTOCOMPLETE: &str = include_str!("fixtures/search_autocomplete.json");

fn build_client(server: &MockServer) -> MapsClient<ReqwestHttpClient> {
	let base_url = Url::parse(&server.base_url()).expect("Mock server base URL should parse.");

	MapsClient::builder(CREDENTIAL)
		.base_url(base_url)
		.build()
		.expect("Client should build against the mock server.")
}

async fn mock_token(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(GET).path("/token").header("authorization", "Bearer signing.credential");
			then.status(200).header("content-type", "application/json").body(TOKEN_BODY);
		})
		.await
}

#[tokio::test]
async fn directions_decodes_routes_and_steps() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server).await;
	let directions = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/directions")
				.header("authorization", BEARER)
				.query_param("origin", "Prager Straße 15, Dresden")
				.query_param("destination", "51.0414609,13.7340304")
				.query_param("userLocation", "1,1")
				.query_param("transportType", "Walking");
			then.status(200).header("content-type", "application/json").body(DIRECTIONS);
		})
		.await;
	let client = build_client(&server);
	let response = client
		.directions(
			"Prager Straße 15, Dresden",
			Location::new(51.0414609, 13.7340304),
			&[
				RequestOption::user_location(Location::new(1., 1.)),
				RequestOption::transport_type(TransportType::Walking),
			],
		)
		.await
		.expect("Directions request should succeed.");
	assert_eq!(response.origin.name, "Prager Straße 15");
	assert_eq!(response.origin.structured_address.areas_of_interest, vec!["Centrum Galerie"]);
	assert_eq!(response.origin.display_map_region.south_latitude, 51.0408148235794);
	assert_eq!(response.destination.coordinate, Location::new(51.0414609, 13.7340304));
	assert_eq!(response.routes.len(), 1);

	let route = &response.routes[0];

	assert_eq!(route.name, "Prager Straße");
	assert_eq!((route.distance_meters, route.duration_seconds), (317, 149));
	assert_eq!(route.transport_type, "Automobile");
	assert!(!route.has_tolls);
	assert_eq!(route.step_indexes, vec![0, 1, 2, 3, 4, 5]);
	assert_eq!(response.steps.len(), 6);
	assert_eq!(response.steps[1].step_path_index, 1);
	assert_eq!(response.steps[1].distance_meters, 93);
	assert_eq!(response.steps[1].duration_seconds, 64);
	assert_eq!(response.steps[1].instructions, "Turn right onto St Petersburger Straße");
	assert_eq!(response.steps[4].transport_type, "WALKING");
	assert!(response.steps[0].instructions.is_empty());
	assert!(response.steps[0].transport_type.is_empty());
	assert_eq!(
		response.step_paths.iter().map(Vec::len).collect::<Vec<_>>(),
		vec![1, 9, 6, 5, 1, 2]
	);
	assert_eq!(response.step_paths[0][0], Location::new(51.042699, 13.735173));
	assert_eq!(
		response.step_paths[5],
		vec![Location::new(51.042004, 13.734587), Location::new(51.04141, 13.734339)]
	);

	token.assert_calls_async(1).await;
	directions.assert_calls_async(1).await;
}

#[tokio::test]
async fn etas_joins_destinations_with_pipes() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server).await;
	let etas = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/etas")
				.header("authorization", BEARER)
				.query_param("origin", "1,1")
				.query_param("destinations", "51.0453064,13.7459337|2.5,-3");
			then.status(200).header("content-type", "application/json").body(ETAS);
		})
		.await;
	let client = build_client(&server);
	let response = client
		.etas(
			Location::new(1., 1.),
			&[Location::new(51.0453064, 13.7459337), Location::new(2.5, -3.)],
			&[],
		)
		.await
		.expect("Etas request should succeed.");
	let expected =
		serde_json::from_str::<EtaResponse>(ETAS).expect("Etas fixture should decode.");

	assert_eq!(response, expected);
	assert_eq!(response.etas[0].expected_travel_time_seconds, 409);

	etas.assert_calls_async(1).await;
}

#[tokio::test]
async fn geocode_and_reverse_geocode_return_results() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server).await;
	let geocode = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/geocode")
				.header("authorization", BEARER)
				.query_param("q", "Königsbrücker Straße 15, Dresden")
				.query_param("limitToCountries", "DE,AT");
			then.status(200).header("content-type", "application/json").body(GEOCODE);
		})
		.await;
	let reverse = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/reverseGeocode")
				.header("authorization", BEARER)
				.query_param("loc", "51.0813007,13.7603922")
				.query_param("lang", "de-DE");
			then.status(200).header("content-type", "application/json").body(REVERSE_GEOCODE);
		})
		.await;
	let client = build_client(&server);
	let places = client
		.geocode(
			"Königsbrücker Straße 15, Dresden",
			&[RequestOption::limit_to_countries(["DE", "AT"])],
		)
		.await
		.expect("Geocode request should succeed.");

	assert_eq!(places.len(), 1);
	assert_eq!(places[0].name, "Königsbrücker Straße 15");
	assert_eq!(places[0].coordinate, Location::new(51.0658585, 13.7466163));
	assert!(!places[0].formatted_address_lines.is_empty());

	let places = client
		.reverse_geocode(Location::new(51.0813007, 13.7603922), &[RequestOption::language("de-DE")])
		.await
		.expect("Reverse geocode request should succeed.");

	assert_eq!(places[0].name, "Königsbrücker Straße 96");

	token.assert_calls_async(1).await;
	geocode.assert_calls_async(1).await;
	reverse.assert_calls_async(1).await;
}

#[tokio::test]
async fn search_and_autocomplete_decode_payloads() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server).await;
	let search = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/search")
				.header("authorization", BEARER)
				.query_param("q", "Coffeeplace")
				.query_param("includePoiCategories", "Cafe,Bakery")
				.query_param("searchLocation", "51.05,13.74");
			then.status(200).header("content-type", "application/json").body(SEARCH);
		})
		.await;
	let autocomplete = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/searchAutocomplete")
				.header("authorization", BEARER)
				.query_param("q", "Coffee");
			then.status(200).header("content-type", "application/json").body(SEARCH_AUTOCOMPLETE);
		})
		.await;
	let client = build_client(&server);
	let response = client
		.search(
			"Coffeeplace",
			&[
				RequestOption::include_poi_categories([Category::Cafe, Category::Bakery]),
				RequestOption::search_location(Location::new(51.05, 13.74)),
			],
		)
		.await
		.expect("Search request should succeed.");
	let expected =
		serde_json::from_str::<SearchResponse>(SEARCH).expect("Search fixture should decode.");

	assert_eq!(response, expected);
	assert_eq!(response.results.len(), 3);
	assert_eq!(response.results[0].poi_category, "Cafe");

	let response = client
		.search_autocomplete("Coffee", &[])
		.await
		.expect("Autocomplete request should succeed.");
	let expected = serde_json::from_str::<SearchAutocompleteResponse>(SEARCH_AUTOCOMPLETE)
		.expect("Autocomplete fixture should decode.");

	assert_eq!(response, expected);
	assert_eq!(response.results[0].completion_url, "/v1/search?q=Coffeeplace");
	assert_eq!(response.results[0].display_lines, vec!["Coffeeplace", "Dresden, Saxony, Germany"]);

	search.assert_calls_async(1).await;
	autocomplete.assert_calls_async(1).await;
}

#[tokio::test]
async fn requests_resolve_against_a_versioned_root() {
	let server = MockServer::start_async().await;
	let token = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/token");
			then.status(200).header("content-type", "application/json").body(TOKEN_BODY);
		})
		.await;
	let search = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/search").query_param("q", "Coffeeplace");
			then.status(200).header("content-type", "application/json").body(SEARCH);
		})
		.await;
	let base_url = Url::parse(&server.url("/v1")).expect("Versioned base URL should parse.");
	let client = MapsClient::builder(CREDENTIAL)
		.base_url(base_url)
		.build()
		.expect("Client should build against the versioned root.");

	client.search("Coffeeplace", &[]).await.expect("Search should succeed.");

	token.assert_calls_async(1).await;
	search.assert_calls_async(1).await;
}
