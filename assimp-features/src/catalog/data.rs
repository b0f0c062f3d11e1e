//! Built-in catalog of the vendored Assimp source tree.
//!
//! Every path is relative to the root of an Assimp checkout. Format names are
//! the ones Assimp's `ASSIMP_BUILD_NO_<NAME>_IMPORTER` switches use once
//! upper-cased.

/// Core library sources compiled into every build.
pub(crate) const COMMON_SOURCES: &[&str] = &[
    "code/CApi/AssimpCExport.cpp",
    "code/CApi/CInterfaceIOWrapper.cpp",
    "code/Common/AssertHandler.cpp",
    "code/Common/Assimp.cpp",
    "code/Common/Base64.cpp",
    "code/Common/BaseImporter.cpp",
    "code/Common/BaseProcess.cpp",
    "code/Common/Bitmap.cpp",
    "code/Common/Compression.cpp",
    "code/Common/CreateAnimMesh.cpp",
    "code/Common/DefaultIOStream.cpp",
    "code/Common/DefaultIOSystem.cpp",
    "code/Common/DefaultLogger.cpp",
    "code/Common/Exceptional.cpp",
    "code/Common/Exporter.cpp",
    "code/Common/IOSystem.cpp",
    "code/Common/Importer.cpp",
    "code/Common/ImporterRegistry.cpp",
    "code/Common/PostStepRegistry.cpp",
    "code/Common/RemoveComments.cpp",
    "code/Common/SGSpatialSort.cpp",
    "code/Common/SceneCombiner.cpp",
    "code/Common/ScenePreprocessor.cpp",
    "code/Common/SkeletonMeshBuilder.cpp",
    "code/Common/SpatialSort.cpp",
    "code/Common/StandardShapes.cpp",
    "code/Common/Subdivision.cpp",
    "code/Common/TargetAnimation.cpp",
    "code/Common/Version.cpp",
    "code/Common/VertexTriangleAdjacency.cpp",
    "code/Common/ZipArchiveIOSystem.cpp",
    "code/Common/material.cpp",
    "code/Common/scene.cpp",
    "code/Geometry/GeometryUtils.cpp",
    "code/Material/MaterialSystem.cpp",
    "code/PostProcessing/ArmaturePopulate.cpp",
    "code/PostProcessing/CalcTangentsProcess.cpp",
    "code/PostProcessing/ComputeUVMappingProcess.cpp",
    "code/PostProcessing/ConvertToLHProcess.cpp",
    "code/PostProcessing/DeboneProcess.cpp",
    "code/PostProcessing/DropFaceNormalsProcess.cpp",
    "code/PostProcessing/EmbedTexturesProcess.cpp",
    "code/PostProcessing/FindDegenerates.cpp",
    "code/PostProcessing/FindInstancesProcess.cpp",
    "code/PostProcessing/FindInvalidDataProcess.cpp",
    "code/PostProcessing/FixNormalsStep.cpp",
    "code/PostProcessing/GenBoundingBoxesProcess.cpp",
    "code/PostProcessing/GenFaceNormalsProcess.cpp",
    "code/PostProcessing/GenVertexNormalsProcess.cpp",
    "code/PostProcessing/ImproveCacheLocality.cpp",
    "code/PostProcessing/JoinVerticesProcess.cpp",
    "code/PostProcessing/LimitBoneWeightsProcess.cpp",
    "code/PostProcessing/MakeVerboseFormat.cpp",
    "code/PostProcessing/OptimizeGraph.cpp",
    "code/PostProcessing/OptimizeMeshes.cpp",
    "code/PostProcessing/PretransformVertices.cpp",
    "code/PostProcessing/ProcessHelper.cpp",
    "code/PostProcessing/RemoveRedundantMaterials.cpp",
    "code/PostProcessing/RemoveVCProcess.cpp",
    "code/PostProcessing/ScaleProcess.cpp",
    "code/PostProcessing/SortByPTypeProcess.cpp",
    "code/PostProcessing/SplitByBoneCountProcess.cpp",
    "code/PostProcessing/SplitLargeMeshes.cpp",
    "code/PostProcessing/TextureTransform.cpp",
    "code/PostProcessing/TriangulateProcess.cpp",
    "code/PostProcessing/ValidateDataStructure.cpp",
];

/// Bundled third-party helpers. Several formats depend on them, but they are
/// compiled regardless of the selection.
pub(crate) const SUPPORT_LIBRARIES: &[(&str, &[&str])] = &[
    ("clipper", &["contrib/clipper/clipper.cpp"]),
    (
        "open3dgc",
        &[
            "contrib/Open3DGC/o3dgcArithmeticCodec.cpp",
            "contrib/Open3DGC/o3dgcDynamicVectorDecoder.cpp",
            "contrib/Open3DGC/o3dgcDynamicVectorEncoder.cpp",
            "contrib/Open3DGC/o3dgcTools.cpp",
            "contrib/Open3DGC/o3dgcTriangleFans.cpp",
        ],
    ),
    (
        "openddlparser",
        &[
            "contrib/openddlparser/code/DDLNode.cpp",
            "contrib/openddlparser/code/OpenDDLCommon.cpp",
            "contrib/openddlparser/code/OpenDDLExport.cpp",
            "contrib/openddlparser/code/OpenDDLParser.cpp",
            "contrib/openddlparser/code/OpenDDLStream.cpp",
            "contrib/openddlparser/code/Value.cpp",
        ],
    ),
    (
        "poly2tri",
        &[
            "contrib/poly2tri/poly2tri/common/shapes.cc",
            "contrib/poly2tri/poly2tri/sweep/advancing_front.cc",
            "contrib/poly2tri/poly2tri/sweep/cdt.cc",
            "contrib/poly2tri/poly2tri/sweep/sweep.cc",
            "contrib/poly2tri/poly2tri/sweep/sweep_context.cc",
        ],
    ),
    ("pugixml", &["contrib/pugixml/src/pugixml.cpp"]),
    ("unzip", &["contrib/unzip/ioapi.c", "contrib/unzip/unzip.c"]),
    (
        "zlib",
        &[
            "contrib/zlib/adler32.c",
            "contrib/zlib/compress.c",
            "contrib/zlib/crc32.c",
            "contrib/zlib/deflate.c",
            "contrib/zlib/gzclose.c",
            "contrib/zlib/gzlib.c",
            "contrib/zlib/gzread.c",
            "contrib/zlib/gzwrite.c",
            "contrib/zlib/infback.c",
            "contrib/zlib/inffast.c",
            "contrib/zlib/inflate.c",
            "contrib/zlib/inftrees.c",
            "contrib/zlib/trees.c",
            "contrib/zlib/uncompr.c",
            "contrib/zlib/zutil.c",
        ],
    ),
    ("zip", &["contrib/zip/src/zip.c"]),
];

/// Formats that are catalogued but never compiled.
///
/// `C4D` needs the proprietary Cineware SDK and `M3D` is disabled upstream.
pub(crate) const UNSUPPORTED_FORMATS: &[&str] = &["C4D", "M3D"];

pub(crate) const FORMATS: &[(&str, &[&str])] = &[
    (
        "3DS",
        &[
            "code/AssetLib/3DS/3DSConverter.cpp",
            "code/AssetLib/3DS/3DSExporter.cpp",
            "code/AssetLib/3DS/3DSLoader.cpp",
        ],
    ),
    (
        "3MF",
        &[
            "code/AssetLib/3MF/D3MFExporter.cpp",
            "code/AssetLib/3MF/D3MFImporter.cpp",
            "code/AssetLib/3MF/D3MFOpcPackage.cpp",
            "code/AssetLib/3MF/XmlSerializer.cpp",
        ],
    ),
    ("3D", &["code/AssetLib/Unreal/UnrealLoader.cpp"]),
    ("AC", &["code/AssetLib/AC/ACLoader.cpp"]),
    (
        "AMF",
        &[
            "code/AssetLib/AMF/AMFImporter.cpp",
            "code/AssetLib/AMF/AMFImporter_Geometry.cpp",
            "code/AssetLib/AMF/AMFImporter_Material.cpp",
            "code/AssetLib/AMF/AMFImporter_Postprocess.cpp",
        ],
    ),
    (
        "ASE",
        &[
            "code/AssetLib/ASE/ASELoader.cpp",
            "code/AssetLib/ASE/ASEParser.cpp",
        ],
    ),
    (
        "Assbin",
        &[
            "code/AssetLib/Assbin/AssbinExporter.cpp",
            "code/AssetLib/Assbin/AssbinFileWriter.cpp",
            "code/AssetLib/Assbin/AssbinLoader.cpp",
        ],
    ),
    ("Assjson", &["code/AssetLib/Assjson/json_exporter.cpp", "code/AssetLib/Assjson/mesh_splitter.cpp"]),
    (
        "Assxml",
        &[
            "code/AssetLib/Assxml/AssxmlExporter.cpp",
            "code/AssetLib/Assxml/AssxmlFileWriter.cpp",
        ],
    ),
    ("B3D", &["code/AssetLib/B3D/B3DImporter.cpp"]),
    (
        "Blend",
        &[
            "code/AssetLib/Blender/BlenderBMesh.cpp",
            "code/AssetLib/Blender/BlenderCustomData.cpp",
            "code/AssetLib/Blender/BlenderDNA.cpp",
            "code/AssetLib/Blender/BlenderLoader.cpp",
            "code/AssetLib/Blender/BlenderModifier.cpp",
            "code/AssetLib/Blender/BlenderScene.cpp",
            "code/AssetLib/Blender/BlenderTessellator.cpp",
        ],
    ),
    ("BVH", &["code/AssetLib/BVH/BVHLoader.cpp"]),
    ("C4D", &["code/AssetLib/C4D/C4DImporter.cpp"]),
    (
        "COB",
        &["code/AssetLib/COB/COBLoader.cpp"],
    ),
    (
        "Collada",
        &[
            "code/AssetLib/Collada/ColladaExporter.cpp",
            "code/AssetLib/Collada/ColladaHelper.cpp",
            "code/AssetLib/Collada/ColladaLoader.cpp",
            "code/AssetLib/Collada/ColladaParser.cpp",
        ],
    ),
    ("CSM", &["code/AssetLib/CSM/CSMLoader.cpp"]),
    (
        "DXF",
        &["code/AssetLib/DXF/DXFLoader.cpp"],
    ),
    (
        "FBX",
        &[
            "code/AssetLib/FBX/FBXAnimation.cpp",
            "code/AssetLib/FBX/FBXBinaryTokenizer.cpp",
            "code/AssetLib/FBX/FBXConverter.cpp",
            "code/AssetLib/FBX/FBXDeformer.cpp",
            "code/AssetLib/FBX/FBXDocument.cpp",
            "code/AssetLib/FBX/FBXDocumentUtil.cpp",
            "code/AssetLib/FBX/FBXExportNode.cpp",
            "code/AssetLib/FBX/FBXExportProperty.cpp",
            "code/AssetLib/FBX/FBXExporter.cpp",
            "code/AssetLib/FBX/FBXImporter.cpp",
            "code/AssetLib/FBX/FBXMaterial.cpp",
            "code/AssetLib/FBX/FBXMeshGeometry.cpp",
            "code/AssetLib/FBX/FBXModel.cpp",
            "code/AssetLib/FBX/FBXNodeAttribute.cpp",
            "code/AssetLib/FBX/FBXParser.cpp",
            "code/AssetLib/FBX/FBXProperties.cpp",
            "code/AssetLib/FBX/FBXTokenizer.cpp",
            "code/AssetLib/FBX/FBXUtil.cpp",
        ],
    ),
    (
        "glTF",
        &[
            "code/AssetLib/glTF/glTFCommon.cpp",
            "code/AssetLib/glTF/glTFExporter.cpp",
            "code/AssetLib/glTF/glTFImporter.cpp",
            "code/AssetLib/glTF2/glTF2Exporter.cpp",
            "code/AssetLib/glTF2/glTF2Importer.cpp",
        ],
    ),
    (
        "HMP",
        &["code/AssetLib/HMP/HMPLoader.cpp"],
    ),
    (
        "IFC",
        &[
            "code/AssetLib/IFC/IFCBoolean.cpp",
            "code/AssetLib/IFC/IFCCurve.cpp",
            "code/AssetLib/IFC/IFCGeometry.cpp",
            "code/AssetLib/IFC/IFCLoader.cpp",
            "code/AssetLib/IFC/IFCMaterial.cpp",
            "code/AssetLib/IFC/IFCOpenings.cpp",
            "code/AssetLib/IFC/IFCProfile.cpp",
            "code/AssetLib/IFC/IFCReaderGen1_2x3.cpp",
            "code/AssetLib/IFC/IFCReaderGen2_2x3.cpp",
            "code/AssetLib/IFC/IFCUtil.cpp",
            "code/AssetLib/STEPParser/STEPFileEncoding.cpp",
            "code/AssetLib/STEPParser/STEPFileReader.cpp",
        ],
    ),
    ("IQM", &["code/AssetLib/IQM/IQMImporter.cpp"]),
    ("Irr", &["code/AssetLib/Irr/IRRLoader.cpp", "code/AssetLib/Irr/IRRShared.cpp"]),
    (
        "IrrMesh",
        &[
            "code/AssetLib/Irr/IRRMeshLoader.cpp",
            "code/AssetLib/Irr/IRRShared.cpp",
        ],
    ),
    (
        "LWO",
        &[
            "code/AssetLib/LWO/LWOAnimation.cpp",
            "code/AssetLib/LWO/LWOBLoader.cpp",
            "code/AssetLib/LWO/LWOLoader.cpp",
            "code/AssetLib/LWO/LWOMaterial.cpp",
        ],
    ),
    (
        "LWS",
        &[
            "code/AssetLib/LWO/LWOAnimation.cpp",
            "code/AssetLib/LWS/LWSLoader.cpp",
        ],
    ),
    ("M3D", &["code/AssetLib/M3D/M3DExporter.cpp", "code/AssetLib/M3D/M3DImporter.cpp", "code/AssetLib/M3D/M3DWrapper.cpp"]),
    ("MD2", &["code/AssetLib/MD2/MD2Loader.cpp"]),
    ("MD3", &["code/AssetLib/MD3/MD3Loader.cpp"]),
    (
        "MD5",
        &[
            "code/AssetLib/MD5/MD5Loader.cpp",
            "code/AssetLib/MD5/MD5Parser.cpp",
        ],
    ),
    ("MDC", &["code/AssetLib/MDC/MDCLoader.cpp"]),
    (
        "MDL",
        &[
            "code/AssetLib/MDL/HalfLife/HL1MDLLoader.cpp",
            "code/AssetLib/MDL/HalfLife/UniqueNameGenerator.cpp",
            "code/AssetLib/MDL/MDLLoader.cpp",
            "code/AssetLib/MDL/MDLMaterialLoader.cpp",
        ],
    ),
    (
        "MMD",
        &[
            "code/AssetLib/MMD/MMDImporter.cpp",
            "code/AssetLib/MMD/MMDPmxParser.cpp",
        ],
    ),
    ("MS3D", &["code/AssetLib/MS3D/MS3DLoader.cpp"]),
    ("NDO", &["code/AssetLib/NDO/NDOLoader.cpp"]),
    ("NFF", &["code/AssetLib/NFF/NFFLoader.cpp"]),
    (
        "Obj",
        &[
            "code/AssetLib/Obj/ObjExporter.cpp",
            "code/AssetLib/Obj/ObjFileImporter.cpp",
            "code/AssetLib/Obj/ObjFileMtlImporter.cpp",
            "code/AssetLib/Obj/ObjFileParser.cpp",
        ],
    ),
    ("OFF", &["code/AssetLib/OFF/OFFLoader.cpp"]),
    (
        "Ogre",
        &[
            "code/AssetLib/Ogre/OgreBinarySerializer.cpp",
            "code/AssetLib/Ogre/OgreImporter.cpp",
            "code/AssetLib/Ogre/OgreMaterial.cpp",
            "code/AssetLib/Ogre/OgreStructs.cpp",
            "code/AssetLib/Ogre/OgreXmlSerializer.cpp",
        ],
    ),
    (
        "OpenGEX",
        &[
            "code/AssetLib/OpenGEX/OpenGEXExporter.cpp",
            "code/AssetLib/OpenGEX/OpenGEXImporter.cpp",
        ],
    ),
    ("Pbrt", &["code/Pbrt/PbrtExporter.cpp"]),
    (
        "Ply",
        &[
            "code/AssetLib/Ply/PlyExporter.cpp",
            "code/AssetLib/Ply/PlyLoader.cpp",
            "code/AssetLib/Ply/PlyParser.cpp",
        ],
    ),
    ("Q3BSP", &["code/AssetLib/Q3BSP/Q3BSPFileImporter.cpp", "code/AssetLib/Q3BSP/Q3BSPFileParser.cpp"]),
    ("Q3D", &["code/AssetLib/Q3D/Q3DLoader.cpp"]),
    ("Raw", &["code/AssetLib/Raw/RawLoader.cpp"]),
    ("SIB", &["code/AssetLib/SIB/SIBImporter.cpp"]),
    ("SMD", &["code/AssetLib/SMD/SMDLoader.cpp"]),
    ("STEP", &["code/AssetLib/Step/StepExporter.cpp"]),
    (
        "STL",
        &[
            "code/AssetLib/STL/STLExporter.cpp",
            "code/AssetLib/STL/STLLoader.cpp",
        ],
    ),
    ("Terragen", &["code/AssetLib/Terragen/TerragenLoader.cpp"]),
    (
        "X",
        &[
            "code/AssetLib/X/XFileExporter.cpp",
            "code/AssetLib/X/XFileImporter.cpp",
            "code/AssetLib/X/XFileParser.cpp",
        ],
    ),
    (
        "X3D",
        &[
            "code/AssetLib/X3D/X3DExporter.cpp",
            "code/AssetLib/X3D/X3DGeoHelper.cpp",
            "code/AssetLib/X3D/X3DImporter.cpp",
            "code/AssetLib/X3D/X3DImporter_Geometry2D.cpp",
            "code/AssetLib/X3D/X3DImporter_Geometry3D.cpp",
            "code/AssetLib/X3D/X3DImporter_Group.cpp",
            "code/AssetLib/X3D/X3DImporter_Light.cpp",
            "code/AssetLib/X3D/X3DImporter_Metadata.cpp",
            "code/AssetLib/X3D/X3DImporter_Networking.cpp",
            "code/AssetLib/X3D/X3DImporter_Postprocess.cpp",
            "code/AssetLib/X3D/X3DImporter_Rendering.cpp",
            "code/AssetLib/X3D/X3DImporter_Shape.cpp",
            "code/AssetLib/X3D/X3DImporter_Texturing.cpp",
            "code/AssetLib/X3D/X3DXmlHelper.cpp",
        ],
    ),
    ("XGL", &["code/AssetLib/XGL/XGLLoader.cpp"]),
];

/// Include directories, relative to the checkout, handed to the compiler.
pub(crate) const INCLUDE_DIRS: &[&str] = &[
    "include",
    "code",
    ".",
    "contrib",
    "contrib/zlib",
    "contrib/unzip",
    "contrib/rapidjson/include",
    "contrib/pugixml/src",
    "contrib/openddlparser/include",
    "contrib/utf8cpp/source",
    "contrib/Open3DGC",
];

/// License inventory: `(path in checkout, installed file name under lib/)`.
pub(crate) const LICENSES: &[(&str, &str)] = &[
    ("LICENSE", "LICENSE"),
    ("contrib/zlib/LICENSE", "LICENSE.zlib"),
    ("contrib/rapidjson/license.txt", "LICENSE.rapidjson"),
    ("contrib/unzip/MiniZip64_info.txt", "LICENSE.unzip"),
    ("contrib/poly2tri/LICENSE", "LICENSE.poly2tri"),
    ("contrib/openddlparser/LICENSE", "LICENSE.openddlparser"),
    ("contrib/Open3DGC/LICENSE", "LICENSE.open3dgc"),
    ("contrib/clipper/License.txt", "LICENSE.clipper"),
];
