use convert_case::Case;
use convert_case::Casing;
use darling::FromDeriveInput;
use darling::FromField;
use proc_macro2::Ident;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;
use syn::Type;

#[derive(Debug, FromField)]
#[darling(attributes(tursomodel))]
struct FieldReceiver {
    pub ident: Option<Ident>,
    pub ty:    Type,

    #[darling(default)]
    pub auto_increment: bool,

    #[darling(default)]
    pub column_name: Option<String>,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(tursomodel), supports(struct_named))]
struct TableReceiver {
    pub ident: Ident,
    pub data:  darling::ast::Data<(), FieldReceiver>,

    #[darling(default)]
    pub table_name: Option<String>,
}

#[derive(Debug)]
struct FieldInfo {
    pub field_name:        Ident,
    pub column_name:       String,
    pub is_optional:       bool,
    pub is_auto_increment: bool,
}

#[derive(Debug)]
struct TableInfo {
    pub struct_name: Ident,
    pub table_name:  String,
    pub fields:      Vec<FieldInfo>,
}

impl FieldReceiver {
    fn into_field_info(self) -> darling::Result<FieldInfo> {
        let field_name = self.ident.ok_or_else(|| darling::Error::custom("expected a named field"))?;
        let column_name = self.column_name.unwrap_or_else(|| field_name.to_string());

        Ok(FieldInfo {
            is_optional: is_option_type(&self.ty),
            field_name,
            column_name,
            is_auto_increment: self.auto_increment,
        })
    }
}

impl TableReceiver {
    fn into_table_info(self) -> darling::Result<TableInfo> {
        let table_name = self.table_name.unwrap_or_else(|| self.ident.to_string().to_case(Case::Snake));

        let fields = self
            .data
            .take_struct()
            .ok_or_else(|| darling::Error::unsupported_shape("expected a struct with named fields"))?
            .fields
            .into_iter()
            .map(FieldReceiver::into_field_info)
            .collect::<darling::Result<Vec<_>>>()?;

        Ok(TableInfo { struct_name: self.ident, table_name, fields })
    }
}

/// Derives `TableTrait`, `FromRecord` and `IntoPattern`.
///
/// Struct attribute: `#[tursomodel(table_name = "...")]` (default: the
/// struct name in snake_case). Field attributes: `column_name = "..."` and
/// `auto_increment`, which leaves the column out of the pattern while its
/// value is NULL so the database assigns it.
#[proc_macro_derive(Table, attributes(tursomodel))]
pub fn derive_table(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    let info = match TableReceiver::from_derive_input(&input).and_then(TableReceiver::into_table_info) {
        Ok(info) => info,
        Err(e) => return e.write_errors().into(),
    };

    impl_table(&info).into()
}

fn impl_table(info: &TableInfo) -> TokenStream2 {
    let name = &info.struct_name;
    let table_name = &info.table_name;
    let columns: Vec<&str> = info.fields.iter().map(|f| f.column_name.as_str()).collect();

    let from_record_fields: Vec<_> = info
        .fields
        .iter()
        .map(|f| {
            let field_name = &f.field_name;
            let col_name = &f.column_name;
            if f.is_optional {
                quote! {
                    #field_name: tursomodel::FromValue::from_value(
                        record.get_value(#col_name).cloned().unwrap_or(tursomodel::Value::Null),
                    )?
                }
            } else {
                quote! {
                    #field_name: record.get(#col_name)?
                }
            }
        })
        .collect();

    let pattern_inserts: Vec<_> = info
        .fields
        .iter()
        .map(|f| {
            let field_name = &f.field_name;
            let col_name = &f.column_name;
            if f.is_auto_increment {
                quote! {
                    let value = tursomodel::IntoValue::into_value(self.#field_name);
                    if !matches!(value, tursomodel::Value::Null) {
                        pattern.insert(#col_name, value);
                    }
                }
            } else {
                quote! {
                    pattern.insert(#col_name, tursomodel::IntoValue::into_value(self.#field_name));
                }
            }
        })
        .collect();

    quote! {
        impl tursomodel::TableTrait for #name {
            fn table_name() -> &'static str {
                #table_name
            }

            fn columns() -> &'static [&'static str] {
                &[#(#columns),*]
            }
        }

        impl tursomodel::FromRecord for #name {
            fn from_record(record: &tursomodel::Record) -> tursomodel::Result<Self> {
                Ok(Self {
                    #(#from_record_fields),*
                })
            }
        }

        impl tursomodel::IntoPattern for #name {
            fn into_pattern(self) -> tursomodel::Pattern {
                let mut pattern = tursomodel::Pattern::new();
                #(#pattern_inserts)*
                pattern
            }
        }
    }
}

fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}
