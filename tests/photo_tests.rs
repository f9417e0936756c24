/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use flickr::rest::{
        DEFAULT_BUDDY_ICON, DEFAULT_PREFIX, PhotoAttributes, buddy_icon_url, url_from_element_id,
    };
    use serde_json::json;

    #[test]
    fn numeric_attributes_are_stringified() {
        let attrs = PhotoAttributes::normalize(&json!({
            "server": 1234, "id": 5678, "secret": 90, "farm": 321
        }));
        assert_eq!(
            attrs.url(),
            "http://farm321.static.flickr.com/1234/5678_90.jpg"
        );
        assert_eq!(
            attrs.element_id(DEFAULT_PREFIX),
            "photo-1234-5678-90-321--jpg"
        );
    }

    #[test]
    fn url_without_farm() {
        let attrs = PhotoAttributes::normalize(&json!({
            "server": "1234", "id": "5678", "secret": "90"
        }));
        assert_eq!(attrs.url(), "http://static.flickr.com/1234/5678_90.jpg");
        assert_eq!(attrs.element_id("blah"), "blah-1234-5678-90---jpg");
    }

    #[test]
    fn null_farm_counts_as_missing() {
        let attrs = PhotoAttributes::normalize(&json!({
            "server": "1234", "id": "5678", "secret": "90", "farm": null
        }));
        assert_eq!(attrs.farm, "");
        assert_eq!(attrs.url(), "http://static.flickr.com/1234/5678_90.jpg");
    }

    #[test]
    fn element_id_with_size() {
        let attrs = PhotoAttributes::new("1234", "5678", "90")
            .with_farm("321")
            .with_size("b");
        let uid = attrs.element_id("blah");
        assert_eq!(uid, "blah-1234-5678-90-321-b-jpg");
        assert_eq!(
            url_from_element_id(&uid),
            "http://farm321.static.flickr.com/1234/5678_90_b.jpg"
        );
        assert_eq!(PhotoAttributes::from_element_id(&uid), attrs);
    }

    #[test]
    fn element_id_round_trips_empty_segments() {
        for attrs in [
            PhotoAttributes::new("1234", "5678", "90"),
            PhotoAttributes::new("", "5678", "").with_size("m"),
            PhotoAttributes::new("7", "8", "9")
                .with_farm("66")
                .with_format("png"),
            PhotoAttributes::new("", "", "").with_format(""),
        ] {
            let uid = attrs.element_id("any_prefix");
            assert_eq!(PhotoAttributes::from_element_id(&uid), attrs, "uid {}", uid);
        }
    }

    #[test]
    fn short_element_id_leaves_fields_empty() {
        let attrs = PhotoAttributes::from_element_id("photo-1234-5678");
        assert_eq!(attrs.server, "1234");
        assert_eq!(attrs.id, "5678");
        assert_eq!(attrs.secret, "");
        assert_eq!(attrs.format, "");
        assert_eq!(attrs.original_secret, None);
    }

    #[test]
    fn original_url_needs_size_o_and_both_originals() {
        let attrs = PhotoAttributes::normalize(&json!({
            "server": "1234", "id": "5678", "secret": "90", "farm": "321",
            "size": "o", "originalsecret": "9999", "originalformat": "png"
        }));
        assert_eq!(
            attrs.url(),
            "http://farm321.static.flickr.com/1234/5678_9999_o.png"
        );

        // Only one original attribute falls back to the standard form
        let attrs = PhotoAttributes::normalize(&json!({
            "server": "1234", "id": "5678", "secret": "90", "farm": "321",
            "size": "o", "originalsecret": "9999"
        }));
        assert_eq!(
            attrs.url(),
            "http://farm321.static.flickr.com/1234/5678_90_o.jpg"
        );

        // Originals without size o are ignored
        let attrs = PhotoAttributes::new("1234", "5678", "90").with_original("9999", "png");
        assert_eq!(attrs.url(), "http://static.flickr.com/1234/5678_90.jpg");
    }

    #[test]
    fn format_falls_back_to_type() {
        let attrs = PhotoAttributes::normalize(&json!({
            "server": "1", "id": "2", "secret": "3", "type": "gif"
        }));
        assert_eq!(attrs.format, "gif");

        let attrs = PhotoAttributes::normalize(&json!({
            "server": "1", "id": "2", "secret": "3", "type": "gif", "format": "png"
        }));
        assert_eq!(attrs.format, "png");
    }

    #[test]
    fn originals_absent_unless_given() {
        let attrs = PhotoAttributes::normalize(&json!({ "id": "2" }));
        assert_eq!(attrs.original_secret, None);
        assert_eq!(attrs.original_format, None);

        let attrs = PhotoAttributes::normalize(&json!({ "id": "2", "originalsecret": "" }));
        assert_eq!(attrs.original_secret, Some(String::new()));
    }

    #[test]
    fn deserializes_from_flickr_photo_list() {
        let photos: Vec<PhotoAttributes> = serde_json::from_value(json!([
            {"id": "5678", "owner": "12345678@N00", "secret": "90", "server": "1234",
             "farm": 1, "title": "sunset", "ispublic": 1},
            {"id": "5679", "secret": "91", "server": "1234", "farm": 2}
        ]))
        .unwrap();
        let urls: Vec<String> = photos.iter().map(PhotoAttributes::url).collect();
        assert_eq!(
            urls,
            vec![
                "http://farm1.static.flickr.com/1234/5678_90.jpg",
                "http://farm2.static.flickr.com/1234/5679_91.jpg",
            ]
        );
    }

    #[test]
    fn buddy_icons() {
        assert_eq!(buddy_icon_url("12345678@N1234", None, None), DEFAULT_BUDDY_ICON);
        assert_eq!(
            buddy_icon_url("12345678@N1234", Some("92"), None),
            "http://static.flickr.com/92/buddyicons/12345678@N1234.jpg"
        );
        assert_eq!(
            buddy_icon_url("12345678@N1234", Some("92"), Some("1")),
            "http://farm1.static.flickr.com/92/buddyicons/12345678@N1234.jpg"
        );
    }

    #[test]
    fn zero_icon_server_means_no_icon() {
        assert_eq!(buddy_icon_url("U", Some("0"), Some("1")), DEFAULT_BUDDY_ICON);
        assert_eq!(buddy_icon_url("U", Some(""), None), DEFAULT_BUDDY_ICON);
        assert_eq!(buddy_icon_url("U", Some("abc"), None), DEFAULT_BUDDY_ICON);
        assert_eq!(buddy_icon_url("U", Some("000"), None), DEFAULT_BUDDY_ICON);
    }

    #[test]
    fn oversized_icon_server_is_not_zero() {
        assert_eq!(
            buddy_icon_url("U", Some("99999999999999999999"), None),
            "http://static.flickr.com/99999999999999999999/buddyicons/U.jpg"
        );
        assert_eq!(
            buddy_icon_url("U", Some("07x"), Some("2")),
            "http://farm2.static.flickr.com/07x/buddyicons/U.jpg"
        );
    }
}
