use hyper::{client::HttpConnector, Body, Client};
use hyper_tls::HttpsConnector;
use rand::Rng;

pub fn hyper_client() -> Client<HttpsConnector<HttpConnector>> {
    let https = HttpsConnector::new();
    Client::builder().build::<_, Body>(https)
}

pub fn random_useragent(random_value: bool) -> String {
    let name = option_env!("CARGO_PKG_NAME").unwrap_or("addrgen-rs");
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("0.0.0");

    let mut rv = "".to_string();
    if random_value {
        let mut rng = rand::thread_rng();
        rv.push('/');
        rv.push_str(rng.gen_range(1000..9999).to_string().as_str())
    }

    format!("{}/{}{}", name, version, rv)
}
