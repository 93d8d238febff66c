use crate::driver::Statement;
use crate::error::{Error, Result};
use crate::value::Value;

/// A single positional parameter
///
/// # Examples
/// - `42i64`, `"alice"`, `3.5f64`
/// - `None::<String>` binds NULL
/// - `Value::Bytes(vec![1, 2, 3])`
pub trait Param {
    fn to_value(&self) -> Value;
}

macro_rules! impl_param {
    ($($t:ty),+) => {
        $(
            impl Param for $t {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

impl_param!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool);

impl Param for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl Param for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl Param for [u8] {
    fn to_value(&self) -> Value {
        Value::Bytes(self.to_vec())
    }
}

impl Param for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Param for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: Param> Param for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, Param::to_value)
    }
}

impl<T: Param + ?Sized> Param for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// A positional parameter list
///
/// The i-th parameter (0-based) is bound to placeholder `i + 1`.
pub trait Params {
    /// Number of parameters
    fn len(&self) -> usize;

    /// Check if there are no parameters
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bind every parameter to `stmt`
    fn bind_to<S: Statement>(&self, stmt: &mut S) -> Result<()>;
}

/// Bind `params` to `stmt`, rejecting lists longer than the placeholder count
pub fn bind_params<S: Statement, P: Params>(stmt: &mut S, params: &P) -> Result<()> {
    if let Some(expected) = stmt.parameter_count()
        && params.len() > expected
    {
        return Err(Error::BindingError {
            index: expected + 1,
            message: format!(
                "{} parameters given but the statement has {} placeholders",
                params.len(),
                expected
            ),
        });
    }
    params.bind_to(stmt)
}

/// No parameters
impl Params for () {
    fn len(&self) -> usize {
        0
    }

    fn bind_to<S: Statement>(&self, _stmt: &mut S) -> Result<()> {
        Ok(())
    }
}

impl<T: Param> Params for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn bind_to<S: Statement>(&self, stmt: &mut S) -> Result<()> {
        for (i, param) in self.iter().enumerate() {
            stmt.bind(i + 1, &param.to_value())?;
        }
        Ok(())
    }
}

impl<T: Param> Params for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn bind_to<S: Statement>(&self, stmt: &mut S) -> Result<()> {
        self.as_slice().bind_to(stmt)
    }
}

impl<T: Param, const N: usize> Params for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn bind_to<S: Statement>(&self, stmt: &mut S) -> Result<()> {
        self.as_slice().bind_to(stmt)
    }
}

/// `None` binds nothing
impl<P: Params> Params for Option<P> {
    fn len(&self) -> usize {
        self.as_ref().map_or(0, Params::len)
    }

    fn bind_to<S: Statement>(&self, stmt: &mut S) -> Result<()> {
        match self {
            Some(params) => params.bind_to(stmt),
            None => Ok(()),
        }
    }
}

impl<P: Params + ?Sized> Params for &P {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn bind_to<S: Statement>(&self, stmt: &mut S) -> Result<()> {
        (**self).bind_to(stmt)
    }
}

macro_rules! impl_params_tuple {
    ($n:expr; $($idx:tt: $T:ident),+) => {
        impl<$($T: Param),+> Params for ($($T,)+) {
            fn len(&self) -> usize {
                $n
            }

            fn bind_to<S: Statement>(&self, stmt: &mut S) -> Result<()> {
                $(
                    stmt.bind($idx + 1, &self.$idx.to_value())?;
                )+
                Ok(())
            }
        }
    };
}

impl_params_tuple!(1; 0: A);
impl_params_tuple!(2; 0: A, 1: B);
impl_params_tuple!(3; 0: A, 1: B, 2: C);
impl_params_tuple!(4; 0: A, 1: B, 2: C, 3: D);
impl_params_tuple!(5; 0: A, 1: B, 2: C, 3: D, 4: E);
impl_params_tuple!(6; 0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
impl_params_tuple!(7; 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
impl_params_tuple!(8; 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);
impl_params_tuple!(9; 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I);
impl_params_tuple!(10; 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J);
impl_params_tuple!(11; 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K);
impl_params_tuple!(12; 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K, 11: L);
