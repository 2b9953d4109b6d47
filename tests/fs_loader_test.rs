use text_scatter::{
    config::DemoConfig,
    resources::{self, AssetLoader, FsAssetLoader},
};

use crate::common::test_utils::seeded;

mod common;

fn asset_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("text-scatter-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[tokio::test]
async fn reads_assets_from_disk_and_builds_the_scene() {
    let root = asset_dir("ok");
    let mut config = DemoConfig::default();
    config.assets.root = root.clone();
    for file in [&config.assets.font, &config.assets.text_matcap, &config.assets.decoration_matcap] {
        let path = root.join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, file.as_bytes()).unwrap();
    }

    let loader = FsAssetLoader::new(config.assets.root.clone());
    assert_eq!(
        loader.load_binary(&config.assets.font).await.unwrap(),
        config.assets.font.as_bytes()
    );
    let scene = resources::setup(&loader, &config, &mut seeded(4)).await.unwrap();
    assert_eq!(scene.decoration_count(), 200);
    assert_eq!(scene.text.material.texture.data, config.assets.text_matcap.as_bytes());

    std::fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn missing_directory_reports_the_path() {
    let root = asset_dir("missing");
    let loader = FsAssetLoader::new(root.clone());
    let err = loader.load_binary("fonts/none.json").await.unwrap_err();
    assert!(err.to_string().contains("none.json"), "{err}");
}
