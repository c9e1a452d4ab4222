//! Scene storage and visibility queries.

use glint_core::{Light, Material};
use glint_math::{DVec3, Interval, MathResult, Ray};

use crate::{shading::SHADOW_EPSILON, Hit, SceneError, SceneResult, Shape};

/// Index of a material in its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// Materials, shapes and point lights, owned in flat arrays.
///
/// Read-only once rendering starts.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    materials: Vec<Material>,
    shapes: Vec<Shape>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material and get the id shapes use to refer to it.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Add a shape whose material is already in this scene.
    pub fn add_shape(&mut self, shape: Shape) -> SceneResult<()> {
        let MaterialId(index) = shape.material();
        if index >= self.materials.len() {
            return Err(SceneError::UnknownMaterial(index));
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, center: DVec3, radius: f64, material: MaterialId) -> SceneResult<()> {
        self.add_shape(Shape::sphere(center, radius, material)?)
    }

    /// Add an infinite plane.
    pub fn add_plane(&mut self, point: DVec3, normal: DVec3, material: MaterialId) -> SceneResult<()> {
        self.add_shape(Shape::plane(point, normal, material)?)
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Closest hit strictly in front of the ray origin.
    ///
    /// Linear scan; on exactly equal distances the earlier shape wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.intersect(ray))
            .filter(|hit| Interval::FORWARD.surrounds(hit.t))
            .fold(None, |closest: Option<Hit>, hit| match closest {
                Some(c) if c.t <= hit.t => Some(c),
                _ => Some(hit),
            })
    }

    /// Whether anything blocks `point` from the light in direction `light_dir`.
    ///
    /// Any hit along the shadow ray counts, including hits beyond the light
    /// itself. The ray starts `SHADOW_EPSILON` off the surface.
    pub fn is_shadowed(&self, point: DVec3, light_dir: DVec3) -> MathResult<bool> {
        let shadow_ray = Ray::offset(point, light_dir, SHADOW_EPSILON)?;
        Ok(self.nearest_hit(&shadow_ray).is_some())
    }
}
