//! Whole-file emission of the code model.

use stencil_codegen_typescript::model::{
    Access, FileModel, ImportKind, ImportTable, Parameter, Property,
};

#[test]
fn test_user_controller_end_to_end() {
    let mut file = FileModel::new("UserController");
    let class = file.add_class("UserController");
    class
        .add_property(Property::new("apiService", "ApiService").private())
        .unwrap();
    class.constructor_mut().set_content("super();");
    class
        .add_method("load")
        .set_arrow(true)
        .set_return_type("void")
        .set_content("this.apiService.get(\"user\");");

    insta::assert_snapshot!(file.generate(), @r#"
    export class UserController {
        private apiService: ApiService;

        constructor() {
            super();
        }

        public load = (): void => {
            this.apiService.get("user");
        };
    }
    "#);
}

#[test]
fn test_independent_passes_share_declarations() {
    let mut file = FileModel::new("PostController");

    // DI pass
    file.add_class("PostController")
        .constructor_mut()
        .add_parameter(Parameter::new("apiService", "ApiService").private())
        .unwrap();
    file.add_import(["ApiService"], "../service/ApiService", ImportKind::Module);

    // ACL pass
    file.add_class("PostController")
        .constructor_mut()
        .append_content("this.acl = authService.getActionsOn('post');");
    file.add_import(["AuthService"], "../service/AuthService", ImportKind::Module);

    // CRUD pass
    let class = file.add_class("PostController");
    class.constructor_mut().append_content("this.load();");
    class.add_method("load").set_content("this.busy = true;");
    class.add_method("load").append_content("this.fetch();");

    let code = file.generate();
    assert_eq!(code.matches("constructor(").count(), 1);
    assert_eq!(code.matches("public load(").count(), 1);
    assert!(code.contains(
        "    constructor(private apiService: ApiService) {\n\
         \x20       this.acl = authService.getActionsOn('post');\n\
         \x20       this.load();\n\
         \x20   }\n"
    ));
    assert!(code.contains("        this.busy = true;\n        this.fetch();\n"));
}

#[test]
fn test_generate_twice_is_byte_identical() {
    let mut file = FileModel::new("UserList");
    file.add_import(["React"], "react", ImportKind::Default);
    file.add_interface("IUserListProps").set_parent("IComponentProps");
    file.add_function("UserList")
        .set_arrow(true)
        .set_content("return null;")
        .add_inner_function("onFetch")
        .set_content("load();");
    file.add_class("Store")
        .add_property(Property::new("count", "number").with_access(Access::Protected).with_default(0))
        .unwrap();

    let first = file.generate();
    let second = file.generate();
    assert_eq!(first, second);
}

#[test]
fn test_top_level_items_are_separated_by_one_blank_line() {
    let mut file = FileModel::new("mixed");
    file.add_import(["A"], "./A", ImportKind::Module);
    file.add_interface("IA");
    file.add_interface("IB");
    file.add_class("C");
    file.add_function("run");

    insta::assert_snapshot!(file.generate(), @r#"
    import { A } from "./A";

    export interface IA {}

    export interface IB {}

    export class C {}

    export function run() {
    }
    "#);
}

#[test]
fn test_import_union_in_first_seen_order() {
    let calls: [&[&str]; 4] = [&["b", "a"], &["c"], &["a", "d"], &["b"]];
    let mut table = ImportTable::new();
    for symbols in calls {
        table.add(symbols.iter().copied(), "./mod", ImportKind::Module);
    }

    let entries: Vec<_> = table.iter().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].render(), "import { b, a, c, d } from \"./mod\";");
}

#[test]
fn test_module_and_namespace_of_same_path_stay_apart() {
    for path in ["angular", "./local/Thing", "angular.material.IDialogOptions"] {
        let mut table = ImportTable::new();
        table
            .add(["X"], path, ImportKind::Module)
            .add(["Y"], path, ImportKind::Namespace);

        let lines: Vec<String> = table.iter().map(|e| e.render()).collect();
        assert_eq!(lines.len(), 2, "{path}");
        assert_ne!(lines[0], lines[1]);
    }
}

#[test]
fn test_entry_order_follows_first_reference() {
    let mut file = FileModel::new("a");
    file.add_import(["Z"], "./z", ImportKind::Module);
    file.add_import(["A"], "./a", ImportKind::Module);
    file.add_import(["Z2"], "./z", ImportKind::Module);

    assert!(file.generate().starts_with(
        "import { Z, Z2 } from \"./z\";\nimport { A } from \"./a\";\n"
    ));
}
