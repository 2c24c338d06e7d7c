use crate::caes::{CaesInstance, Literal};
use crate::utils::LabelType;
use anyhow::Result;
use std::io::Read;

/// The type of callback functions to call when warnings are raised while parsing an instance.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read Carneades problem instances.
pub trait InstanceReader<T>
where
    T: LabelType,
{
    /// Reads a [`CaesInstance`].
    /// The [LabelType](crate::utils::LabelType) of the returned instance depends on the reader.
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    ///
    /// # Example
    ///
    /// ```
    /// # use carneades::caes::CaesInstance;
    /// # use carneades::io::{CaesReader, InstanceReader};
    /// fn read_instance_from_str(s: &str) -> CaesInstance<String> {
    ///     let reader = CaesReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid instance")
    /// }
    /// # read_instance_from_str("prop(murder).");
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<CaesInstance<T>>;

    /// Reads a literal from a string, resolving it against an instance.
    fn read_literal_from_str(&self, instance: &CaesInstance<T>, s: &str) -> Result<Literal<T>>;

    /// Adds a callback function to call when warnings are raised while parsing an instance.
    fn add_warning_handler(&mut self, h: WarningHandler);
}
