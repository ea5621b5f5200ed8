//! Test family: numbers whose payload is a fixed number of `f64` values.

use crate::ports::{AbstractObject, DerivedObject, ObjectClone, SerializableObject};
use bricks_core::{BricksResult, PayloadReader, PayloadWriter};

pub trait Number: SerializableObject + Send + Sync {
    fn my_number(&self) -> i32;
    fn my_data(&self) -> &[f64];

    fn clone_box(&self) -> Box<dyn Number>;
}

impl ObjectClone<dyn Number> for dyn Number {
    fn clone_object(&self) -> Box<dyn Number> {
        self.clone_box()
    }
}

fn write_values(values: &[f64], buffer: &mut [u8]) -> BricksResult<()> {
    let mut writer = PayloadWriter::new(buffer);
    for &v in values {
        writer.write_f64(v)?;
    }
    Ok(())
}

fn read_values(values: &mut [f64], buffer: &[u8]) -> BricksResult<()> {
    let mut reader = PayloadReader::new(buffer);
    for v in values.iter_mut() {
        *v = reader.read_f64()?;
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberIsOne {
    pub data: Vec<f64>,
}

impl Default for NumberIsOne {
    fn default() -> Self {
        Self { data: vec![1.0] }
    }
}

impl AbstractObject for NumberIsOne {
    fn object_type(&self) -> &str {
        "one"
    }
}

impl SerializableObject for NumberIsOne {
    fn serialize(&self, buffer: &mut [u8]) -> BricksResult<()> {
        write_values(&self.data, buffer)
    }

    fn deserialize(&mut self, buffer: &[u8]) -> BricksResult<()> {
        read_values(&mut self.data, buffer)
    }
}

impl Number for NumberIsOne {
    fn clone_box(&self) -> Box<dyn Number> {
        Box::new(self.clone())
    }

    fn my_number(&self) -> i32 {
        1
    }

    fn my_data(&self) -> &[f64] {
        &self.data
    }
}

impl DerivedObject for NumberIsOne {
    type Base = dyn Number;

    fn byte_size() -> usize {
        std::mem::size_of::<f64>()
    }

    fn create() -> Box<dyn Number> {
        Box::new(Self::default())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberIsTwo {
    pub data: Vec<f64>,
}

impl Default for NumberIsTwo {
    fn default() -> Self {
        Self {
            data: vec![2.0, 2.0],
        }
    }
}

impl AbstractObject for NumberIsTwo {
    fn object_type(&self) -> &str {
        "two"
    }
}

impl SerializableObject for NumberIsTwo {
    fn serialize(&self, buffer: &mut [u8]) -> BricksResult<()> {
        write_values(&self.data, buffer)
    }

    fn deserialize(&mut self, buffer: &[u8]) -> BricksResult<()> {
        read_values(&mut self.data, buffer)
    }
}

impl Number for NumberIsTwo {
    fn clone_box(&self) -> Box<dyn Number> {
        Box::new(self.clone())
    }

    fn my_number(&self) -> i32 {
        2
    }

    fn my_data(&self) -> &[f64] {
        &self.data
    }
}

impl DerivedObject for NumberIsTwo {
    type Base = dyn Number;

    fn byte_size() -> usize {
        2 * std::mem::size_of::<f64>()
    }

    fn create() -> Box<dyn Number> {
        Box::new(Self::default())
    }
}
