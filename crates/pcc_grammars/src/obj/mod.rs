//! Wavefront OBJ meshes.
//!
//! A model is a `mtllib` statement followed by one or more meshes. Each mesh
//! lists its vertices, texture coordinates, normals and faces in that order:
//!
//! ```text
//! mtllib house.mtl
//! v 1.0 2.0 3.0          # w defaults to 1.0
//! vt 0.5 0.5             # w defaults to 0.0
//! vn 0.0 1.0 0.0
//! usemtl Glass           # optional, applies to this face
//! s off                  # optional, smoothing on unless "off" or "0"
//! f 1/1/1 2//1 3/2 4
//! ```
//!
//! Every field, including the last one on a line, must be followed by
//! whitespace, so a document ends with a newline. Lines starting with `#`
//! are comments and may appear before any statement.

use pcc_core::{
    build, exact_take, literal, many, many0, many1, non_space0, numeric_literal, optional,
    product_into, spaces1, symbol, take_while, BoxedParser, Parser,
};
use tracing::debug;

use crate::{finish, DocumentError};

/// A geometric vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// A texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureCoordinate {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

/// A vertex normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<(f64, f64, f64)> for Normal {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Normal { x, y, z }
    }
}

/// One corner of a face: 1-based indices into the vertex, texture
/// coordinate and normal lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceIndex {
    pub vertex: usize,
    pub texture: Option<usize>,
    pub normal: Option<usize>,
}

impl From<(usize, Option<usize>, Option<usize>)> for FaceIndex {
    fn from((vertex, texture, normal): (usize, Option<usize>, Option<usize>)) -> Self {
        FaceIndex {
            vertex,
            texture,
            normal,
        }
    }
}

/// Smooth shading state of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    On,
    Off,
}

impl Shading {
    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "off" | "0" => Shading::Off,
            _ => Shading::On,
        }
    }
}

/// A polygon with its material and shading.
#[derive(Clone, Debug, PartialEq)]
pub struct Face<'a> {
    /// Material name, empty when the face has no `usemtl`.
    pub material: &'a str,
    pub shading: Shading,
    pub indices: Vec<FaceIndex>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<'a> {
    pub vertices: Vec<Vertex>,
    pub texture_coordinates: Vec<TextureCoordinate>,
    pub normals: Vec<Normal>,
    pub faces: Vec<Face<'a>>,
}

type MeshParts<'a> = (Vec<Vertex>, Vec<TextureCoordinate>, Vec<Normal>, Vec<Face<'a>>);

impl<'a> From<MeshParts<'a>> for Mesh<'a> {
    fn from((vertices, texture_coordinates, normals, faces): MeshParts<'a>) -> Self {
        Mesh {
            vertices,
            texture_coordinates,
            normals,
            faces,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model<'a> {
    /// File name given to `mtllib`.
    pub material_lib: &'a str,
    pub meshes: Vec<Mesh<'a>>,
}

impl<'a> From<(&'a str, Vec<Mesh<'a>>)> for Model<'a> {
    fn from((material_lib, meshes): (&'a str, Vec<Mesh<'a>>)) -> Self {
        Model {
            material_lib,
            meshes,
        }
    }
}

fn ws<'a>() -> impl Parser<&'a str, Option<&'a str>> {
    optional(spaces1())
}

/// `#` comment lines, each with the whitespace after it.
fn comments0<'a>() -> impl Parser<&'a str, Vec<&'a str>> {
    let line = take_while(|c: char| c != '\n').keep_left(exact_take(1));
    many0(literal("#").keep_right(line).keep_left(ws()))
}

/// Comments, then `keyword`, whitespace and `body`.
fn statement<'a, O, P>(keyword: &'static str, body: P) -> BoxedParser<'a, &'a str, O>
where
    O: 'a,
    P: Parser<&'a str, O> + Send + Sync + 'a,
{
    comments0()
        .keep_right(literal(keyword))
        .keep_right(spaces1())
        .keep_right(body)
}

/// A number and the whitespace after it.
fn number<'a>() -> BoxedParser<'a, &'a str, f64> {
    numeric_literal::<f64>().keep_left(spaces1())
}

/// A name and the whitespace after it.
fn name<'a>() -> BoxedParser<'a, &'a str, &'a str> {
    non_space0().keep_left(spaces1())
}

/// `v x y z [w]`
pub fn vertex<'a>() -> BoxedParser<'a, &'a str, Vertex> {
    let coordinates = build(
        |x: f64, y: f64, z: f64, w: Option<f64>| Vertex {
            x,
            y,
            z,
            w: w.unwrap_or(1.0),
        },
        (number(), number(), number(), optional(number())),
    );
    statement("v", coordinates)
}

/// `vt u v [w]`
pub fn texture_coordinate<'a>() -> BoxedParser<'a, &'a str, TextureCoordinate> {
    let coordinates = build(
        |u: f64, v: f64, w: Option<f64>| TextureCoordinate {
            u,
            v,
            w: w.unwrap_or(0.0),
        },
        (number(), number(), optional(number())),
    );
    statement("vt", coordinates)
}

/// `vn x y z`
pub fn normal<'a>() -> BoxedParser<'a, &'a str, Normal> {
    statement("vn", product_into::<Normal, _, _, _>((number(), number(), number())))
}

/// `v`, `v/t`, `v//n` or `v/t/n`.
pub fn face_index<'a>() -> impl Parser<&'a str, FaceIndex> {
    let index = numeric_literal::<usize>;
    product_into::<FaceIndex, _, _, _>((
        index(),
        optional(symbol('/').keep_right(index())),
        optional(
            symbol('/')
                .keep_right(optional(symbol('/')))
                .keep_right(index()),
        ),
    ))
}

/// `[usemtl name] [s flag] f i i i ...` with at least three indices.
pub fn face<'a>() -> BoxedParser<'a, &'a str, Face<'a>> {
    let material = statement("usemtl", name());
    let shading = statement("s", name().map(Shading::from_keyword));
    let indices = statement("f", many(3, face_index().keep_left(spaces1())));
    build(
        |material: Option<&'a str>, shading: Option<Shading>, indices: Vec<FaceIndex>| Face {
            material: material.unwrap_or(""),
            shading: shading.unwrap_or(Shading::On),
            indices,
        },
        (optional(material), optional(shading), indices),
    )
    .boxed()
}

/// One or more vertices, texture coordinates, one or more normals and one
/// or more faces.
pub fn mesh<'a>() -> impl Parser<&'a str, Mesh<'a>> {
    product_into::<Mesh<'a>, _, _, _>((
        many1(vertex()),
        many0(texture_coordinate()),
        many1(normal()),
        many1(face()),
    ))
}

/// `mtllib name`, possibly after blank lines and comments.
pub fn material_lib<'a>() -> BoxedParser<'a, &'a str, &'a str> {
    ws().keep_right(statement("mtllib", name()))
}

/// A whole model: `mtllib` and one or more meshes, then trailing comments.
pub fn model<'a>() -> impl Parser<&'a str, Model<'a>> {
    product_into::<Model<'a>, _, _, _>((material_lib(), many1(mesh()))).keep_left(comments0())
}

/// Parse a whole OBJ document.
pub fn parse_obj(text: &str) -> Result<Model<'_>, DocumentError> {
    let model = finish(text, model().parse(text))?;
    debug!(meshes = model.meshes.len(), "parsed obj model");
    Ok(model)
}
