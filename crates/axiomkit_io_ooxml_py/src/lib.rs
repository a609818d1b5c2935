use std::collections::BTreeMap;

use axiomkit_io_ooxml::{
    EnumAttributeValue, PageMargins, PageSetup, PrintOptions, ValidationError, serialize_element,
    serialize_page_setup_pr,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyBool, PyDict, PyFloat, PyInt, PyString};

const N_BRIDGE_ABI_VERSION: u64 = 1;
const C_BRIDGE_CONTRACT_VERSION: &str = "axiomkit.ooxml.attributes.v1";

#[pyclass(name = "PageSetup")]
struct PyPageSetup {
    inner: PageSetup,
}

#[pymethods]
impl PyPageSetup {
    #[new]
    #[pyo3(signature = (**kwargs))]
    fn new(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let dict_config = parse_attribute_config(kwargs)?;
        let inner = PageSetup::from_config(&dict_config).map_err(derive_py_value_error)?;
        Ok(Self { inner })
    }

    /// Apply keyword attributes; returns the ignored keys.
    #[pyo3(signature = (**kwargs))]
    fn set(&mut self, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Vec<String>> {
        let dict_config = parse_attribute_config(kwargs)?;
        let report = self.inner.set(&dict_config).map_err(derive_py_value_error)?;
        Ok(report.ignored)
    }

    #[pyo3(signature = (width = None, height = None))]
    fn fit_to(&mut self, width: Option<i64>, height: Option<i64>) -> PyResult<(u32, u32)> {
        self.inner
            .fit_to(width, height)
            .map_err(derive_py_value_error)
    }

    #[getter]
    fn fit_to_page(&self) -> bool {
        self.inner.is_fit_to_page()
    }

    #[getter]
    fn fit_to_height(&self) -> Option<u32> {
        self.inner.fit_to_height()
    }

    #[setter]
    fn set_fit_to_height(&mut self, value: i64) -> PyResult<()> {
        self.inner
            .set_fit_to_height(value)
            .map_err(derive_py_value_error)
    }

    #[getter]
    fn fit_to_width(&self) -> Option<u32> {
        self.inner.fit_to_width()
    }

    #[setter]
    fn set_fit_to_width(&mut self, value: i64) -> PyResult<()> {
        self.inner
            .set_fit_to_width(value)
            .map_err(derive_py_value_error)
    }

    #[getter]
    fn orientation(&self) -> Option<&'static str> {
        self.inner.orientation().map(|v| v.as_str())
    }

    #[setter]
    fn set_orientation(&mut self, value: &str) -> PyResult<()> {
        self.inner
            .set_orientation(value)
            .map_err(derive_py_value_error)
    }

    #[getter]
    fn paper_height(&self) -> Option<String> {
        self.inner.paper_height().map(ToString::to_string)
    }

    #[setter]
    fn set_paper_height(&mut self, value: &str) -> PyResult<()> {
        self.inner
            .set_paper_height(value)
            .map_err(derive_py_value_error)
    }

    #[getter]
    fn paper_width(&self) -> Option<String> {
        self.inner.paper_width().map(ToString::to_string)
    }

    #[setter]
    fn set_paper_width(&mut self, value: &str) -> PyResult<()> {
        self.inner
            .set_paper_width(value)
            .map_err(derive_py_value_error)
    }

    #[getter]
    fn scale(&self) -> Option<u16> {
        self.inner.scale()
    }

    #[setter]
    fn set_scale(&mut self, value: i64) -> PyResult<()> {
        self.inner.set_scale(value).map_err(derive_py_value_error)
    }

    /// `<pageSetUpPr fitToPage="1" />` when page fitting is requested.
    fn page_setup_pr_xml(&self) -> Option<String> {
        serialize_page_setup_pr(&self.inner)
    }

    fn to_xml(&self) -> String {
        serialize_element(&self.inner)
    }

    fn __repr__(&self) -> String {
        format!("PageSetup({})", serialize_element(&self.inner))
    }
}

#[pyclass(name = "PrintOptions")]
struct PyPrintOptions {
    inner: PrintOptions,
}

#[pymethods]
impl PyPrintOptions {
    #[new]
    #[pyo3(signature = (**kwargs))]
    fn new(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let dict_config = parse_attribute_config(kwargs)?;
        let inner = PrintOptions::from_config(&dict_config).map_err(derive_py_value_error)?;
        Ok(Self { inner })
    }

    #[pyo3(signature = (**kwargs))]
    fn set(&mut self, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Vec<String>> {
        let dict_config = parse_attribute_config(kwargs)?;
        let report = self.inner.set(&dict_config).map_err(derive_py_value_error)?;
        Ok(report.ignored)
    }

    #[getter]
    fn grid_lines(&self) -> Option<bool> {
        self.inner.grid_lines()
    }

    #[getter]
    fn headings(&self) -> Option<bool> {
        self.inner.headings()
    }

    #[getter]
    fn horizontal_centered(&self) -> Option<bool> {
        self.inner.horizontal_centered()
    }

    #[getter]
    fn vertical_centered(&self) -> Option<bool> {
        self.inner.vertical_centered()
    }

    fn to_xml(&self) -> String {
        serialize_element(&self.inner)
    }

    fn __repr__(&self) -> String {
        format!("PrintOptions({})", serialize_element(&self.inner))
    }
}

#[pyclass(name = "PageMargins")]
struct PyPageMargins {
    inner: PageMargins,
}

#[pymethods]
impl PyPageMargins {
    #[new]
    #[pyo3(signature = (**kwargs))]
    fn new(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let dict_config = parse_attribute_config(kwargs)?;
        let inner = PageMargins::from_config(&dict_config).map_err(derive_py_value_error)?;
        Ok(Self { inner })
    }

    #[pyo3(signature = (**kwargs))]
    fn set(&mut self, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Vec<String>> {
        let dict_config = parse_attribute_config(kwargs)?;
        let report = self.inner.set(&dict_config).map_err(derive_py_value_error)?;
        Ok(report.ignored)
    }

    /// `(left, right, top, bottom, header, footer)`; unset sides are `None`.
    fn margins(
        &self,
    ) -> (
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
    ) {
        (
            self.inner.left(),
            self.inner.right(),
            self.inner.top(),
            self.inner.bottom(),
            self.inner.header(),
            self.inner.footer(),
        )
    }

    fn to_xml(&self) -> String {
        serialize_element(&self.inner)
    }

    fn __repr__(&self) -> String {
        format!("PageMargins({})", serialize_element(&self.inner))
    }
}

fn parse_attribute_config(
    kwargs: Option<&Bound<'_, PyDict>>,
) -> PyResult<BTreeMap<String, EnumAttributeValue>> {
    let mut dict_config = BTreeMap::new();
    let Some(kwargs) = kwargs else {
        return Ok(dict_config);
    };
    for (key, value) in kwargs.iter() {
        let c_key = key.extract::<String>()?;
        // `None` leaves the attribute unset, matching keyword defaults.
        if value.is_none() {
            continue;
        }
        dict_config.insert(c_key, parse_attribute_value(&value)?);
    }
    Ok(dict_config)
}

fn parse_attribute_value(obj: &Bound<'_, PyAny>) -> PyResult<EnumAttributeValue> {
    // `bool` is an `int` subclass in Python.
    if obj.is_instance_of::<PyBool>() {
        return Ok(EnumAttributeValue::Boolean(obj.extract::<bool>()?));
    }
    if obj.is_instance_of::<PyInt>() {
        return Ok(EnumAttributeValue::Integer(obj.extract::<i64>()?));
    }
    if obj.is_instance_of::<PyFloat>() {
        return Ok(EnumAttributeValue::Float(obj.extract::<f64>()?));
    }
    if obj.is_instance_of::<PyString>() {
        return Ok(EnumAttributeValue::String(obj.extract::<String>()?));
    }
    if let Ok(dict_obj) = obj.downcast::<PyDict>() {
        return Ok(EnumAttributeValue::Map(parse_attribute_config(Some(
            dict_obj,
        ))?));
    }

    Err(PyValueError::new_err(format!(
        "Attribute values must be bool, int, float, str or dict, got: {}",
        obj.get_type().name()?
    )))
}

fn derive_py_value_error(err: ValidationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pymodule]
fn _axiomkit_io_ooxml_rs(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyPageSetup>()?;
    module.add_class::<PyPrintOptions>()?;
    module.add_class::<PyPageMargins>()?;
    module.add("__bridge_abi__", N_BRIDGE_ABI_VERSION)?;
    module.add("__bridge_contract__", C_BRIDGE_CONTRACT_VERSION)?;
    Ok(())
}
