use egui::{Color32, pos2};
use image::Rgb;
use shape_sketch::export::export_size;
use shape_sketch::{Document, ExportError, Geometry, ImageExporter, StyledShape};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);

fn rectangle(filled: bool) -> StyledShape {
    StyledShape::new(
        Geometry::Rectangle { origin: pos2(10.0, 10.0), width: 40.0, height: 30.0 },
        Color32::RED,
        2,
        filled,
    )
}

#[test]
fn test_empty_document_exports_white_image() {
    let document = Document::new();
    let image = ImageExporter::new().rasterize(document.snapshot(), [20, 10]).unwrap();

    assert_eq!(image.dimensions(), (20, 10));
    assert!(image.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_rectangle_outline_pixels() {
    let mut document = Document::new();
    document.append_to_active(rectangle(false));

    let image = ImageExporter::new().rasterize(document.snapshot(), [64, 64]).unwrap();

    assert_eq!(*image.get_pixel(10, 20), RED);
    assert_eq!(*image.get_pixel(50, 20), RED);
    assert_eq!(*image.get_pixel(30, 10), RED);
    assert_eq!(*image.get_pixel(30, 40), RED);
    // Interior and outside stay background
    assert_eq!(*image.get_pixel(30, 25), WHITE);
    assert_eq!(*image.get_pixel(60, 60), WHITE);
}

#[test]
fn test_filled_rectangle_pixels() {
    let mut document = Document::new();
    document.append_to_active(rectangle(true));

    let image = ImageExporter::new().rasterize(document.snapshot(), [64, 64]).unwrap();

    assert_eq!(*image.get_pixel(30, 25), RED);
    assert_eq!(*image.get_pixel(5, 5), WHITE);
}

#[test]
fn test_later_shapes_paint_over_earlier_ones() {
    let mut document = Document::new();
    document.append_to_active(rectangle(true));
    document.commit_active();
    document.append_to_active(StyledShape::new(
        Geometry::Rectangle { origin: pos2(20.0, 20.0), width: 10.0, height: 10.0 },
        Color32::BLUE,
        1,
        true,
    ));

    let image = ImageExporter::new().rasterize(document.snapshot(), [64, 64]).unwrap();

    assert_eq!(*image.get_pixel(25, 25), Rgb([0, 0, 255]));
    assert_eq!(*image.get_pixel(40, 35), RED);
}

#[test]
fn test_circle_and_line_pixels() {
    let mut document = Document::new();
    document.append_to_active(StyledShape::new(
        Geometry::Ellipse { origin: pos2(0.0, 0.0), width: 30.0, height: 30.0 },
        Color32::BLUE,
        1,
        true,
    ));
    document.append_to_active(StyledShape::new(
        Geometry::Segment(pos2(40.0, 0.0), pos2(40.0, 20.0)),
        Color32::BLACK,
        1,
        false,
    ));

    let image = ImageExporter::new().rasterize(document.snapshot(), [64, 32]).unwrap();

    assert_eq!(*image.get_pixel(15, 15), Rgb([0, 0, 255]));
    // Corner of the bounding box lies outside the circle
    assert_eq!(*image.get_pixel(1, 1), WHITE);
    assert_eq!(*image.get_pixel(40, 10), Rgb([0, 0, 0]));
    assert_eq!(*image.get_pixel(45, 10), WHITE);
}

#[test]
fn test_zero_sized_canvas_is_rejected() {
    let document = Document::new();
    let exporter = ImageExporter::new();

    let err = exporter.rasterize(document.snapshot(), [0, 10]).unwrap_err();
    assert!(matches!(err, ExportError::EmptyCanvas { width: 0, height: 10 }));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.png");
    assert!(exporter.export_png(document.snapshot(), [10, 0], &path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_export_png_round_trips_pixels() {
    let mut document = Document::new();
    document.append_to_active(rectangle(true));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");

    ImageExporter::new().export_png(document.snapshot(), [64, 48], &path).unwrap();

    let saved = image::open(&path).unwrap().to_rgb8();
    assert_eq!(saved.dimensions(), (64, 48));
    assert_eq!(*saved.get_pixel(30, 25), RED);
    assert_eq!(*saved.get_pixel(2, 2), WHITE);
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");
    std::fs::write(&path, b"not a png").unwrap();

    let document = Document::new();
    ImageExporter::new().export_png(document.snapshot(), [8, 8], &path).unwrap();

    assert_eq!(image::open(&path).unwrap().to_rgb8().dimensions(), (8, 8));
}

#[test]
fn test_export_size_is_one_pixel_per_canvas_point() {
    assert_eq!(export_size(egui::vec2(640.0, 480.0)), [640, 480]);
    assert_eq!(export_size(egui::vec2(799.6, 552.4)), [800, 552]);
    assert_eq!(export_size(egui::vec2(0.0, 300.0)), [0, 300]);
    assert_eq!(export_size(egui::vec2(-5.0, 10.0)), [0, 10]);
}

#[test]
fn test_shape_lands_at_its_canvas_coordinates() {
    let mut document = Document::new();
    document.append_to_active(StyledShape::new(
        Geometry::Rectangle { origin: pos2(90.0, 60.0), width: 20.0, height: 20.0 },
        Color32::RED,
        1,
        true,
    ));
    let size = export_size(egui::vec2(120.0, 90.0));

    let image = ImageExporter::new().rasterize(document.snapshot(), size).unwrap();

    assert_eq!(image.dimensions(), (120, 90));
    assert_eq!(*image.get_pixel(100, 70), RED);
    assert_eq!(*image.get_pixel(80, 70), WHITE);
}
