/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::Result;
use dotenvy::dotenv;
use flickr::rest::{Client, Creds, DEFAULT_PREFIX, Options, Params, PhotoAttributes};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct PhotoPage {
    page: u64,
    pages: u64,
    photo: Vec<PhotoAttributes>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The API key is the only required field for searching public photos
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let text = std::env::args().nth(1).unwrap_or_else(|| "sunset".into());

    let client = Client::with_options(
        Creds::from_shared_secret(&api_key, None),
        Options {
            raise_exception_on_error: true,
            ..Default::default()
        },
    );

    let rsp = client
        .call(
            "flickr.photos.search",
            Params::from([("text", text.as_str())]).with("per_page", 10),
        )
        .await?;
    let photos: PhotoPage = rsp.payload("photos")?;

    println!("Page {} of {}", photos.page, photos.pages);
    for photo in photos.photo {
        println!("{}  {}", photo.element_id(DEFAULT_PREFIX), photo.url());
    }
    Ok(())
}
