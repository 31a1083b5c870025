use serde::Serialize;

use crate::coerce;
use crate::error::TransitError;
use crate::record::GtfsRecord;
use crate::schema::{FieldClass, FieldSchema};
use crate::values::LatLng;

/// The columns of shapes.txt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeField {
    ShapeId,
    PointLat,
    PointLon,
    PointSequence,
    DistTraveled,
    Nonstandard,
}

impl FieldSchema for ShapeField {
    const ALL: &'static [Self] = &[
        ShapeField::ShapeId,
        ShapeField::PointLat,
        ShapeField::PointLon,
        ShapeField::PointSequence,
        ShapeField::DistTraveled,
    ];
    const NONSTANDARD: Self = ShapeField::Nonstandard;

    fn name(self) -> Option<&'static str> {
        Some(match self {
            ShapeField::ShapeId => "shape_id",
            ShapeField::PointLat => "shape_pt_lat",
            ShapeField::PointLon => "shape_pt_lon",
            ShapeField::PointSequence => "shape_pt_sequence",
            ShapeField::DistTraveled => "shape_dist_traveled",
            ShapeField::Nonstandard => return None,
        })
    }

    fn class(self) -> FieldClass {
        match self {
            ShapeField::DistTraveled => FieldClass::Optional,
            ShapeField::Nonstandard => FieldClass::Nonstandard,
            _ => FieldClass::Required,
        }
    }
}

/// One point of a shape. Shapes keep no nonstandard columns.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct Shape {
    pub shape_id: String,
    pub point_lat: f64,
    pub point_lon: f64,
    pub point_sequence: u32,
    pub dist_traveled: Option<f64>,
}

impl GtfsRecord for Shape {
    type Field = ShapeField;
    const FILE_NAME: &'static str = "shapes.txt";

    fn assign(&mut self, field: ShapeField, cell: &str) -> Result<(), TransitError> {
        match field {
            ShapeField::ShapeId => self.shape_id = coerce::string(cell),
            ShapeField::PointLat => self.point_lat = coerce::coordinate(field, cell)?,
            ShapeField::PointLon => self.point_lon = coerce::coordinate(field, cell)?,
            ShapeField::PointSequence => self.point_sequence = coerce::uint(field, cell)?,
            ShapeField::DistTraveled => self.dist_traveled = coerce::optional_double(field, cell)?,
            ShapeField::Nonstandard => {}
        }
        Ok(())
    }
}

impl Shape {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.point_lat,
            lng: self.point_lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Header;

    #[test]
    fn shape_point() {
        let h: Header<ShapeField> =
            Header::read("shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence,note").unwrap();
        let point = Shape::from_row("S1,45.4408,12.3155,0,ignored", &h).unwrap();
        assert_eq!(point.position(), LatLng { lat: 45.4408, lng: 12.3155 });
        assert_eq!(point.point_sequence, 0);
        assert_eq!(point.dist_traveled, None);
    }

    #[test]
    fn coordinates_are_required() {
        let h: Header<ShapeField> =
            Header::read("shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence").unwrap();
        let err = Shape::from_row("S1,,12.3155,0", &h).unwrap_err();
        assert_eq!(
            err,
            TransitError::InvalidFieldType {
                field: "shape_pt_lat",
                value: String::new()
            }
        );
    }

    #[test]
    fn sequence_must_be_unsigned() {
        let h: Header<ShapeField> =
            Header::read("shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence").unwrap();
        assert!(Shape::from_row("S1,45.0,12.0,-1", &h).is_err());
        assert!(Shape::from_row("S1,45.0,12.0,1.5", &h).is_err());
    }
}
