use foodiebaba_boundary::{Credentials, Identity, NewUser, Restaurant, RestaurantId, RestaurantPage};

use crate::{Api, ApiRequest, Result};

/// Public FoodieBaba API
#[derive(Clone)]
pub struct PublicApi {
    api: Api,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantQuery {
    pub page: u32,
    pub limit: u32,
    pub name: Option<String>,
    pub category: Option<String>,
}

impl RestaurantQuery {
    fn into_request(self) -> ApiRequest {
        let Self {
            page,
            limit,
            name,
            category,
        } = self;
        let mut request = ApiRequest::get("/restaurants")
            .query("page", page)
            .query("limit", limit);
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            request = request.query("name", name);
        }
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            request = request.query("category", category);
        }
        request
    }
}

impl PublicApi {
    #[must_use]
    pub const fn new(api: Api) -> Self {
        Self { api }
    }

    #[must_use]
    pub const fn api(&self) -> &Api {
        &self.api
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Identity> {
        let request = ApiRequest::post("/login").json(credentials)?;
        self.api.send(request, None).await
    }

    /// Registration does not create a session.
    pub async fn register(&self, new_user: &NewUser) -> Result<()> {
        let request = ApiRequest::post("/register").json(new_user)?;
        self.api.send_empty(request, None).await
    }

    pub async fn restaurants(&self, query: &RestaurantQuery) -> Result<RestaurantPage> {
        let request = query.clone().into_request();
        self.api.send(request, None).await
    }

    pub async fn restaurant(&self, id: RestaurantId) -> Result<Restaurant> {
        let request = ApiRequest::get(format!("/restaurants/{id}"));
        self.api.send(request, None).await
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use foodiebaba_boundary::UserRole;

    use super::*;
    use crate::{mock::MockClient, Body, Method};

    fn public_api(client: &MockClient) -> PublicApi {
        PublicApi::new(Api::new("http://api", Rc::new(client.clone())))
    }

    #[tokio::test]
    async fn login() {
        let client = MockClient::new();
        client.respond(200, r#"{"username":"anna","role":"admin","token":"t"}"#);
        let credentials = Credentials {
            email: "anna@example.com".into(),
            password: "secret".into(),
        };
        let identity = public_api(&client).login(&credentials).await.unwrap();
        assert_eq!(identity.username, "anna");
        assert_eq!(identity.role, UserRole::Admin);

        let req = client.last_request().unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://api/login");
        assert_eq!(req.header("Authorization"), None);
        let Body::Json(json) = req.body else {
            panic!("expected JSON body");
        };
        let sent: Credentials = serde_json::from_str(&json).unwrap();
        assert_eq!(sent, credentials);
    }

    #[tokio::test]
    async fn register_ignores_response_body() {
        let client = MockClient::new();
        client.respond(201, r#"{"message":"User registered successfully"}"#);
        let new_user = NewUser {
            username: "anna".into(),
            email: "anna@example.com".into(),
            password: "secret".into(),
        };
        assert!(public_api(&client).register(&new_user).await.is_ok());
        assert_eq!(client.last_request().unwrap().url, "http://api/register");
    }

    #[tokio::test]
    async fn query_restaurants_without_empty_filters() {
        let client = MockClient::new();
        client.respond(200, "[]");
        let query = RestaurantQuery {
            page: 2,
            limit: 10,
            name: Some(String::new()),
            category: Some("Thai".into()),
        };
        let page = public_api(&client).restaurants(&query).await.unwrap();
        assert_eq!(page, RestaurantPage::List(vec![]));
        assert_eq!(
            client.last_request().unwrap().url,
            "http://api/restaurants?page=2&limit=10&category=Thai"
        );
    }

    #[tokio::test]
    async fn fetch_single_restaurant() {
        let client = MockClient::new();
        client.respond(
            200,
            r#"{"id":3,"name":"A","category":"B","address":"C","status":"approved"}"#,
        );
        let restaurant = public_api(&client).restaurant(3).await.unwrap();
        assert_eq!(restaurant.id, 3);
        assert_eq!(client.last_request().unwrap().url, "http://api/restaurants/3");
    }
}
