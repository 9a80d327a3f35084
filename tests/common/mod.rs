//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which builds an [`ImageService`] over a
//! scoped temporary storage directory. The [`with_server`] constructor
//! starts Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;

use imgvault::images::ImageService;
use imgvault::server::{create_router, AppContext};
use imgvault_store::ImageStore;

/// Test harness wrapping a fully-constructed [`ImageService`] backed by
/// a temporary directory that is cleaned up on drop.
pub struct TestHarness {
    pub service: Arc<ImageService>,
    _dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new harness with a fresh temporary store.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = ImageStore::new(dir.path().join("blobs"), dir.path().join("metadata"))
            .expect("failed to create image store");
        Self {
            service: Arc::new(ImageService::new(store)),
            _dir: dir,
        }
    }

    /// Start an Axum server on a random port and return the harness
    /// together with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let ctx = AppContext {
            service: harness.service.clone(),
        };
        let app = create_router(ctx);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("no local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        (harness, addr)
    }
}

/// Encode a solid red RGB image as PNG.
pub fn red_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = image::RgbImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = image::Rgb([255, 0, 0]);
    }
    encode_png(image::DynamicImage::ImageRgb8(img))
}

/// Encode a half-transparent green RGBA image as PNG.
pub fn rgba_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = image::RgbaImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = image::Rgba([0, 255, 0, 128]);
    }
    encode_png(image::DynamicImage::ImageRgba8(img))
}

fn encode_png(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("failed to encode test image");
    buf.into_inner()
}
