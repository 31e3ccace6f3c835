//! Integration test: managed-domain (`cdn.pixelbin.io/<cloud>/...`) URLs.

mod common;

use common::{managed, MANAGED_BASE};
use pburl_core::{obj_to_url, url_to_obj, Dpr, Transformation, UrlDescriptor, UrlError};

const FILE: &str = "__playground/playground-default.jpeg";

#[test]
fn plain_pattern_without_zone() {
    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/t.resize()/__playground/playground-default.jpeg",
        &managed(),
    )
    .unwrap();

    let expected = UrlDescriptor {
        protocol: "https".to_string(),
        host: "cdn.pixelbin.io".to_string(),
        base_url: MANAGED_BASE.to_string(),
        version: "v2".to_string(),
        cloud_name: "red-scene-95b6ea".to_string(),
        pattern: "t.resize()".to_string(),
        file_path: FILE.to_string(),
        transformations: vec![Transformation::new("t", "resize")],
        ..Default::default()
    };
    assert_eq!(obj, expected);
    assert!(!obj.worker);
    assert!(obj.zone.is_empty());
}

#[test]
fn deep_file_path_and_zone() {
    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/zonesl/t.resize()/test/__playground/playground-default.jpeg",
        &managed(),
    )
    .unwrap();
    assert_eq!(obj.zone, "zonesl");
    assert_eq!(obj.file_path, "test/__playground/playground-default.jpeg");
}

#[test]
fn missing_version_defaults_to_v1() {
    let obj = url_to_obj(
        "https://cdn.pixelbin.io/red-scene-95b6ea/t.rotate(a:102,b:200)/a.jpeg",
        &managed(),
    )
    .unwrap();
    assert_eq!(obj.version, "v1");
    assert_eq!(
        obj.transformations,
        vec![Transformation::new("t", "rotate")
            .with_param("a", "102")
            .with_param("b", "200")]
    );
}

#[test]
fn worker_urls() {
    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/wrkr/image.jpeg",
        &managed(),
    )
    .unwrap();
    assert!(obj.worker);
    assert_eq!(obj.worker_path, "image.jpeg");
    assert_eq!(obj.pattern, "");
    assert_eq!(obj.file_path, "");
    assert!(obj.transformations.is_empty());

    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/falling-surf-7c8bb8/fyprod/wrkr/misc/general/free/original/images/favicon.ico",
        &managed(),
    )
    .unwrap();
    assert!(obj.worker);
    assert_eq!(obj.zone, "fyprod");
    assert_eq!(obj.worker_path, "misc/general/free/original/images/favicon.ico");
}

#[test]
fn wrkr_inside_file_path_is_not_a_worker() {
    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/falling-surf-7c8bb8/original/z0/orgs/33/wrkr/icons/a.png",
        &managed(),
    )
    .unwrap();
    assert!(!obj.worker);
    assert_eq!(obj.pattern, "original");
    assert!(obj.transformations.is_empty());
    assert_eq!(obj.file_path, "z0/orgs/33/wrkr/icons/a.png");
}

#[test]
fn presets_in_both_forms() {
    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/z-slug/t.compress()~t.resize()~t.extend()~p.apply(n:presetNameXyx)/a.jpeg",
        &managed(),
    )
    .unwrap();
    assert_eq!(obj.transformations.len(), 4);
    assert_eq!(
        obj.transformations[3],
        Transformation::new("p", "apply").with_param("n", "presetNameXyx")
    );

    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/t.rotate(a:102)~p:preset1(a:12/a.jpeg",
        &managed(),
    )
    .unwrap();
    assert_eq!(
        obj.transformations[1],
        Transformation::preset("preset1").with_param("a", "12")
    );
}

#[test]
fn query_options_parsed() {
    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/feel/erase.bg(shadow:true)~t.merge(m:underlay,i:eU44YkFJOHlVMmZrWVRDOUNTRm1D,b:screen,r:true)/MZZKB3e1hT48o0NYJ2Kxh.jpeg?dpr=2.5&f_auto=true",
        &managed(),
    )
    .unwrap();
    assert_eq!(obj.search, "dpr=2.5&f_auto=true");
    assert_eq!(obj.options.dpr, Some(Dpr::Ratio(2.5)));
    assert_eq!(obj.options.f_auto, Some(true));
    assert_eq!(obj.transformations[1].params.len(), 4);
}

#[test]
fn dpr_out_of_range_rejected() {
    let err = url_to_obj(
        "https://cdn.pixelbin.io/v2/feel/erase.bg()/a.jpeg?dpr=5.5&f_auto=true",
        &managed(),
    )
    .unwrap_err();
    assert!(matches!(err, UrlError::IllegalQueryParameter(_)));
    assert_eq!(
        err.to_string(),
        "DPR value should be numeric and should be between 0.1 to 5.0"
    );
}

#[test]
fn layout_failures() {
    for url in [
        "https://cdn.pixelbin.io/v2",
        "https://cdn.pixelbin.io/v3/t.compress()~t.resize()/a.jpeg",
        "https://cdn.pixelbin.io//v2/dill-doe-36b4fc/original~original/a.jpeg",
    ] {
        let err = url_to_obj(url, &managed()).unwrap_err();
        assert!(matches!(err, UrlError::InvalidUrl { .. }), "url {url}");
        assert_eq!(
            err.to_string(),
            "Invalid pixelbin url. Please make sure the url is correct."
        );
        assert!(err.pattern_cause().is_none());
    }
}

#[test]
fn pattern_failures() {
    for url in [
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/test/t.compress()/a.jpeg",
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/t.compress~t.resize()/a.jpeg",
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/zonesls/t.resize()/a.jpeg",
    ] {
        let err = url_to_obj(url, &managed()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error Processing url. Please check the url is correct",
            "url {url}"
        );
        assert!(err.pattern_cause().is_some());
    }
}

#[test]
fn build_full_chain() {
    let obj = UrlDescriptor {
        base_url: MANAGED_BASE.to_string(),
        cloud_name: "red-scene-95b6ea".to_string(),
        zone: "z-slug".to_string(),
        version: "v2".to_string(),
        file_path: FILE.to_string(),
        transformations: vec![
            Transformation::new("t", "resize")
                .with_param("h", "200")
                .with_param("w", "100")
                .with_param("fill", "999"),
            Transformation::new("erase", "bg").with_param("i", "general"),
            Transformation::new("t", "extend"),
            Transformation::preset("preset1"),
        ],
        ..Default::default()
    };
    assert_eq!(
        obj_to_url(&obj, &managed()).unwrap(),
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/z-slug/t.resize(h:200,w:100,fill:999)~erase.bg(i:general)~t.extend()~p:preset1/__playground/playground-default.jpeg"
    );
}

#[test]
fn build_without_base_url_uses_default() {
    let obj = UrlDescriptor {
        cloud_name: "red-scene-95b6ea".to_string(),
        file_path: FILE.to_string(),
        ..Default::default()
    };
    assert_eq!(
        obj_to_url(&obj, &managed()).unwrap(),
        "https://cdn.pixelbin.io/v2/red-scene-95b6ea/original/__playground/playground-default.jpeg"
    );
}

#[test]
fn build_f_auto_from_text() {
    let options = pburl_core::QueryOptions::default().with_f_auto("abc");
    assert_eq!(
        options.unwrap_err().to_string(),
        "F_auto value should be boolean"
    );
}

#[test]
fn path_text_survives_parsing() {
    let obj = url_to_obj(
        "https://cdn.pixelbin.io/v2/cloud/t.text(t:{hi})~t.resize(w:100)/dir/my photo.jpeg?dpr=2.0",
        &managed(),
    )
    .unwrap();
    assert_eq!(
        obj.transformations[0],
        Transformation::new("t", "text").with_param("t", "{hi}")
    );
    assert_eq!(obj.file_path, "dir/my photo.jpeg");
    assert_eq!(obj.search, "dpr=2.0");

    let obj = url_to_obj("https://cdn.pixelbin.io/v2/cloud/t.resize()/../a.png", &managed()).unwrap();
    assert_eq!(obj.transformations, vec![Transformation::new("t", "resize")]);
    assert_eq!(obj.file_path, "../a.png");
}
